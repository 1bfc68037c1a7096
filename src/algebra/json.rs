#![allow(non_snake_case)]
use crate::algebra::*;

use serde::{de::DeserializeOwned, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};

/// JSON file input and output for matrix types
pub trait MatrixJSONReadWrite: Sized {
    fn write_to_file(&self, file: &mut File) -> Result<(), io::Error>;
    fn read_from_file(file: &mut File) -> Result<Self, io::Error>;
}

// serde fills the fields directly, so the storage length is
// checked against the dimensions before handing the matrix out
trait CheckedStorage {
    fn storage_is_consistent(&self) -> bool;
}

impl<T> CheckedStorage for Matrix<T> {
    fn storage_is_consistent(&self) -> bool {
        self.m.checked_mul(self.n) == Some(self.data.len())
    }
}

impl<T> CheckedStorage for SymmetricMatrix<T> {
    fn storage_is_consistent(&self) -> bool {
        checked_triangular_number(self.n) == Some(self.data.len())
    }
}

fn write_json<M: Serialize>(mat: &M, file: &mut File) -> Result<(), io::Error> {
    let json = serde_json::to_string(mat)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

fn read_json<M>(file: &mut File) -> Result<M, io::Error>
where
    M: DeserializeOwned + CheckedStorage,
{
    let mut buffer = String::new();
    file.read_to_string(&mut buffer)?;
    let mat: M = serde_json::from_str(&buffer)?;

    if !mat.storage_is_consistent() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "matrix data length does not match its dimensions",
        ));
    }
    Ok(mat)
}

macro_rules! impl_json_read_write {
    ($M:ident) => {
        impl<T> MatrixJSONReadWrite for $M<T>
        where
            T: FloatT + DeserializeOwned + Serialize,
        {
            fn write_to_file(&self, file: &mut File) -> Result<(), io::Error> {
                write_json(self, file)
            }

            fn read_from_file(file: &mut File) -> Result<Self, io::Error> {
                read_json(file)
            }
        }
    };
}

impl_json_read_write!(Matrix);
impl_json_read_write!(SymmetricMatrix);
