/*
    Serialization of `Fixed<W, F, S, O, R>`
*/

use ::serde::de::Error;
use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::*;

// Values travel as their exact decimal string
impl<const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> Serialize for Fixed<W, F, S, O, R> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de, const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> Deserialize<'de>
    for Fixed<W, F, S, O, R>
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Self::from_decimal(&text).map_err(D::Error::custom)
    }
}
