//! Owner-only output for records that carry secrets.

use std::path::Path;

use tokio::io::AsyncWriteExt as _;

/// Write a witness record, readable by the owner only.
///
/// On Unix the file is created with mode `0o600`, and an existing file is tightened to it
/// before the new contents are written.
///
/// # Errors
/// Returns an error if the file cannot be opened, restricted, or written.
pub(super) async fn write_owner_only(path: &Path, contents: &str) -> eyre::Result<()> {
    let mut file = open_owner_only(path).await?;
    file.write_all(contents.as_bytes()).await?;
    file.flush().await?;
    Ok(())
}

#[cfg(unix)]
async fn open_owner_only(path: &Path) -> eyre::Result<tokio::fs::File> {
    use std::os::unix::fs::PermissionsExt as _;

    let file = tokio::fs::OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .mode(0o600)
        .open(path)
        .await?;
    // `mode` only applies on creation.
    file.set_permissions(std::fs::Permissions::from_mode(0o600))
        .await?;
    Ok(file)
}

#[cfg(not(unix))]
async fn open_owner_only(path: &Path) -> eyre::Result<tokio::fs::File> {
    Ok(tokio::fs::OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(path)
        .await?)
}
