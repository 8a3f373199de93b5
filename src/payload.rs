//! The create-user payload and the temporary file that carries it.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::ser::{Formatter, Serializer};
use tempfile::NamedTempFile;

use crate::error::{SmokeError, SmokeResult};

const FILE_PREFIX: &str = "users-smoke-";
const FILE_SUFFIX: &str = ".json";

/// Body of `POST /users`. Field order is the wire order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUser {
    pub phone: String,
    pub name: String,
    pub avatar: u8,
}

impl CreateUser {
    pub fn new(phone: impl Into<String>, name: impl Into<String>, avatar: u8) -> Self {
        Self {
            phone: phone.into(),
            name: name.into(),
            avatar,
        }
    }

    /// UTF-8 JSON with a single space after each `:` and `,`, no BOM and
    /// no escaping of non-ASCII text.
    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut out = Vec::with_capacity(64);
        let mut ser = Serializer::with_formatter(&mut out, SpacedFormatter);
        self.serialize(&mut ser)?;
        Ok(out)
    }
}

impl Default for CreateUser {
    fn default() -> Self {
        Self::new("13800138000", "张三", 1)
    }
}

/// Compact JSON, except separators are followed by one space.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Owns the on-disk copy of an encoded payload. The file is removed when
/// this value is closed or dropped, whichever comes first.
#[derive(Debug)]
pub struct PayloadFile {
    file: NamedTempFile,
}

impl PayloadFile {
    pub fn create(payload: &CreateUser) -> SmokeResult<Self> {
        let encoded = payload.encode()?;
        let mut file = tempfile::Builder::new()
            .prefix(FILE_PREFIX)
            .suffix(FILE_SUFFIX)
            .tempfile()
            .map_err(|source| SmokeError::payload_file("create", source))?;
        file.write_all(&encoded)
            .and_then(|()| file.flush())
            .map_err(|source| SmokeError::payload_file("write", source))?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn contents(&self) -> SmokeResult<Bytes> {
        fs::read(self.path())
            .map(Bytes::from)
            .map_err(|source| SmokeError::payload_file("read", source))
    }

    /// Deletes the file now, reporting any failure instead of swallowing it
    /// the way drop does.
    pub fn close(self) -> SmokeResult<()> {
        self.file
            .close()
            .map_err(|source| SmokeError::payload_file("delete", source))
    }
}
