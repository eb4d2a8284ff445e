table! {
    places (id) {
        id -> BigInt,
        name -> Text,
        city -> Text,
        notes -> Text,
        latitude -> Nullable<Double>,
        longitude -> Nullable<Double>,
        photos -> Text,
        visited -> SmallInt,
        rating -> Float,
        created_at -> Nullable<BigInt>,
    }
}
