use crate::image::{Image, ImageSize};

impl<T, const CHANNELS: usize> bincode::enc::Encode for Image<T, CHANNELS>
where
    T: bincode::enc::Encode,
{
    fn encode<E: bincode::enc::Encoder>(
        &self,
        encoder: &mut E,
    ) -> Result<(), bincode::error::EncodeError> {
        bincode::Encode::encode(&[self.height(), self.width()], encoder)?;
        bincode::Encode::encode(&self.as_slice(), encoder)?;
        Ok(())
    }
}

impl<T, const CHANNELS: usize, Ctx> bincode::de::Decode<Ctx> for Image<T, CHANNELS>
where
    T: bincode::de::Decode<Ctx>,
{
    fn decode<D: bincode::de::Decoder<Context = Ctx>>(
        decoder: &mut D,
    ) -> Result<Self, bincode::error::DecodeError> {
        let shape: [usize; 2] = bincode::Decode::decode(decoder)?;

        // guard the element count before it is used for allocation checks
        let expected = shape[0]
            .checked_mul(shape[1])
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or_else(|| {
                bincode::error::DecodeError::OtherString(format!(
                    "Image shape overflow: {}x{}x{}",
                    shape[0], shape[1], CHANNELS
                ))
            })?;

        let data: Vec<T> = bincode::Decode::decode(decoder)?;
        if data.len() != expected {
            return Err(bincode::error::DecodeError::OtherString(format!(
                "Image element count mismatch: got {}, expected {}",
                data.len(),
                expected
            )));
        }

        Image::new(
            ImageSize {
                width: shape[1],
                height: shape[0],
            },
            data,
        )
        .map_err(|e| bincode::error::DecodeError::OtherString(format!("Image error: {}", e)))
    }
}

/// Encode an image into a self-describing byte buffer (shape then elements).
pub fn encode_image<T, const CHANNELS: usize>(
    image: &Image<T, CHANNELS>,
) -> Result<Vec<u8>, bincode::error::EncodeError>
where
    T: bincode::enc::Encode,
{
    bincode::encode_to_vec(image, bincode::config::standard())
}

/// Decode an image from a self-describing byte buffer produced by [`encode_image`].
pub fn decode_image<T, const CHANNELS: usize>(
    buffer: &[u8],
) -> Result<Image<T, CHANNELS>, bincode::error::DecodeError>
where
    T: bincode::de::Decode<()>,
{
    let (image, _) = bincode::decode_from_slice(buffer, bincode::config::standard())?;
    Ok(image)
}
