use thiserror::Error;

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("buffer length {got} does not match width*height*bpp = {expected}")]
    BufferSize { expected: usize, got: usize },
}
