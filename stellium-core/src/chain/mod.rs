pub mod index;
mod index_tests;

pub use index::{BlockIndex, ChainView, HeaderChain, IndexEntry};

use std::error::Error;
use bincode::{Decode, Encode, config::standard, decode_from_slice, encode_to_vec};

/// Trait for types that can be serialized/deserialized via bincode
pub trait Serializable: Sized + Encode + Decode<()> {
    fn serialize(&self) -> Result<Vec<u8>, Box<dyn Error>> {
        encode_to_vec(self, standard()).map_err(|e| e.into())
    }

    fn from_bytes(data: &[u8]) -> Result<Self, Box<dyn Error>> {
        decode_from_slice(data, standard()).map(|(decoded, _len)| decoded).map_err(|e| e.into())
    }
}
