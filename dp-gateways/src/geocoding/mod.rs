mod opencage;

pub use self::opencage::*;
