use crate::types::*;
use std::path::Path;
use tokio::io::AsyncReadExt;

const PDF_MAGIC: &[u8] = b"%PDF-";
const MIN_PDF_SIZE: u64 = 500;

/// Size and magic-byte check on an already read prefix
pub fn check_pdf_header(size: u64, header: &[u8]) -> std::result::Result<(), PdfValidationError> {
    if size < MIN_PDF_SIZE {
        return Err(PdfValidationError::TooSmall { size });
    }
    if !header.starts_with(PDF_MAGIC) {
        return Err(PdfValidationError::BadHeader {
            found: header.iter().take(PDF_MAGIC.len()).copied().collect(),
        });
    }
    Ok(())
}

/// Accept a file of at least 500 bytes that starts with `%PDF-`
pub async fn validate_pdf(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut file = tokio::fs::File::open(path).await?;
    let size = file.metadata().await?.len();

    let mut header = [0u8; 5];
    if size >= PDF_MAGIC.len() as u64 {
        file.read_exact(&mut header).await?;
    }

    check_pdf_header(size, &header)?;
    log::debug!("{} looks like a PDF ({} bytes)", path.display(), size);
    Ok(())
}
