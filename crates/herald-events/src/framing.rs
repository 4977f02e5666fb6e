use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::errors::{HeraldError, HeraldErrorKind};
use crate::herald_err;

/// Frames larger than this are rejected before allocating.
pub const MAX_FRAME_LEN: u32 = 16 * 1024 * 1024;

pub struct SizedMessageObj {
    buffer: Vec<u8>,
}

impl SizedMessageObj {
    /// The only way to create a message for the wire, so every payload is bincode.
    pub fn from_struct<T: Serialize>(data: &T) -> Result<Self, HeraldError> {
        let buffer = bincode::serde::encode_to_vec(data, bincode::config::standard())
            .map_err(|e| herald_err!(HeraldErrorKind::Serialize, e.to_string()))?;
        Ok(Self { buffer })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.buffer
    }
}

pub fn decode<T: DeserializeOwned>(buf: &[u8]) -> Result<T, HeraldError> {
    bincode::serde::decode_from_slice(buf, bincode::config::standard())
        .map(|(value, _)| value)
        .map_err(|e| herald_err!(HeraldErrorKind::Deserialize, e.to_string()))
}

pub trait AsyncSizedWrite {
    fn write_sized<'a>(
        &'a mut self,
        what: SizedMessageObj,
    ) -> impl Future<Output = Result<(), HeraldError>> + Send + 'a;
}
impl<W: AsyncWrite + Unpin + Send> AsyncSizedWrite for W {
    fn write_sized<'a>(
        &'a mut self,
        what: SizedMessageObj,
    ) -> impl Future<Output = Result<(), HeraldError>> + Send + 'a {
        async move {
            let buf_len: u32 = what
                .bytes()
                .len()
                .try_into()
                .ok()
                .filter(|len| *len <= MAX_FRAME_LEN)
                .ok_or_else(|| herald_err!(HeraldErrorKind::InvalidData, "message too long"))?;

            self.write_all(&buf_len.to_be_bytes())
                .await
                .map_err(|e| herald_err!(HeraldErrorKind::StreamWrite, e.to_string()))?;
            self.write_all(what.bytes())
                .await
                .map_err(|e| herald_err!(HeraldErrorKind::StreamWrite, e.to_string()))?;
            self.flush()
                .await
                .map_err(|e| herald_err!(HeraldErrorKind::StreamWrite, e.to_string()))?;

            Ok(())
        }
    }
}

pub trait AsyncSizedRead {
    fn read_sized<'a>(
        &'a mut self,
    ) -> impl Future<Output = Result<Vec<u8>, HeraldError>> + Send + 'a;
}
impl<R: AsyncRead + Unpin + Send> AsyncSizedRead for R {
    fn read_sized<'a>(
        &'a mut self,
    ) -> impl Future<Output = Result<Vec<u8>, HeraldError>> + Send + 'a {
        async move {
            let mut buf_len = [0u8; 4];
            self.read_exact(&mut buf_len)
                .await
                .map_err(|e| herald_err!(HeraldErrorKind::StreamRead, e.to_string()))?;

            let msg_len = u32::from_be_bytes(buf_len);
            if msg_len > MAX_FRAME_LEN {
                return Err(herald_err!(
                    HeraldErrorKind::InvalidData,
                    "frame of {} bytes exceeds limit",
                    msg_len
                ));
            }

            let mut buf = vec![0u8; msg_len as usize];
            self.read_exact(&mut buf)
                .await
                .map_err(|e| herald_err!(HeraldErrorKind::StreamRead, e.to_string()))?;

            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{Request, Response};

    #[tokio::test]
    async fn frames_survive_a_duplex_pipe() {
        let (mut client, mut server) = tokio::io::duplex(1024);

        let msg = SizedMessageObj::from_struct(&Request::Dismiss(12)).unwrap();
        client.write_sized(msg).await.unwrap();

        let buf = server.read_sized().await.unwrap();
        let req: Request = decode(&buf).unwrap();
        assert!(matches!(req, Request::Dismiss(12)));
    }

    #[tokio::test]
    async fn oversized_length_prefix_is_rejected() {
        let (mut client, mut server) = tokio::io::duplex(64);
        client
            .write_all(&(MAX_FRAME_LEN + 1).to_be_bytes())
            .await
            .unwrap();

        let err = server.read_sized().await.unwrap_err();
        assert_eq!(err.kind, HeraldErrorKind::InvalidData);
    }

    #[tokio::test]
    async fn closed_stream_is_a_read_error() {
        let (client, mut server) = tokio::io::duplex(64);
        drop(client);

        let err = server.read_sized().await.unwrap_err();
        assert_eq!(err.kind, HeraldErrorKind::StreamRead);
    }

    #[test]
    fn garbage_fails_to_decode() {
        let err = decode::<Response>(&[0xff, 0xff, 0xff]).unwrap_err();
        assert_eq!(err.kind, HeraldErrorKind::Deserialize);
    }
}
