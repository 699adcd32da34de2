use folio_render::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

fn fake_pdf(len: usize) -> Vec<u8> {
    let mut bytes = b"%PDF-1.7\n".to_vec();
    bytes.resize(len, b' ');
    bytes
}

#[tokio::test]
async fn test_accepts_pdf() {
    let file = write_temp(&fake_pdf(500));
    assert!(validate_pdf(file.path()).await.is_ok());
}

#[tokio::test]
async fn test_rejects_small_file() {
    let file = write_temp(&fake_pdf(499));
    let err = validate_pdf(file.path()).await.unwrap_err();
    assert!(matches!(
        err,
        RenderError::InvalidPdf(PdfValidationError::TooSmall { size: 499 })
    ));
}

#[tokio::test]
async fn test_rejects_bad_header() {
    let mut bytes = b"<html>".to_vec();
    bytes.resize(2048, b'x');
    let file = write_temp(&bytes);

    let err = validate_pdf(file.path()).await.unwrap_err();
    match err {
        RenderError::InvalidPdf(PdfValidationError::BadHeader { found }) => {
            assert_eq!(found, b"<html".to_vec());
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_empty_file_is_too_small() {
    let file = write_temp(b"");
    let err = validate_pdf(file.path()).await.unwrap_err();
    assert!(matches!(
        err,
        RenderError::InvalidPdf(PdfValidationError::TooSmall { size: 0 })
    ));
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = validate_pdf(dir.path().join("nope.pdf")).await.unwrap_err();
    assert!(matches!(err, RenderError::Io(_)));
}

#[test]
fn test_check_pdf_header() {
    assert!(check_pdf_header(10_000, b"%PDF-1.4").is_ok());
    assert_eq!(
        check_pdf_header(10_000, b"%PDF"),
        Err(PdfValidationError::BadHeader {
            found: b"%PDF".to_vec()
        })
    );
    assert_eq!(
        check_pdf_header(12, b"%PDF-"),
        Err(PdfValidationError::TooSmall { size: 12 })
    );
}
