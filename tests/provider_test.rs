use std::io::Read;
use std::path::{Path, PathBuf};

use bundlecloak::adapters::providers::offset::{BUNDLE_OFFSET, OffsetDecryptor, OffsetEncryptor};
use bundlecloak::adapters::providers::stream_cipher::{StreamCipherEncryptor, StreamDecryptor};
use bundlecloak::adapters::runtime::pending::PendingBundle;
use bundlecloak::core::errors::{CloakError, Result};
use bundlecloak::core::models::decrypt::DecryptFileInfo;
use bundlecloak::core::models::encrypt::EncryptFileInfo;
use bundlecloak::core::stream::SharedBundleStream;
use bundlecloak::core::traits::loader::{BundleLoader, LoadRequest};
use bundlecloak::core::traits::provider::{DecryptionProvider, EncryptionProvider};

/// In-memory stand-in for the engine's bundle primitive. A "handle" is
/// simply the fully deobfuscated payload, which makes round-trip
/// assertions direct.
#[derive(Clone)]
struct MemoryLoader;

/// Toy content checksum; 0 means "don't verify", like an unset CRC.
fn checksum(data: &[u8]) -> u32 {
    data.iter()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(*b)))
}

fn verify_crc(expected: u32, data: &[u8]) -> Result<()> {
    let actual = checksum(data);
    if expected != 0 && expected != actual {
        return Err(CloakError::ChecksumMismatch { expected, actual });
    }
    Ok(())
}

impl BundleLoader for MemoryLoader {
    type Handle = Vec<u8>;
    type Request = PendingBundle<Vec<u8>>;

    fn load_from_stream(
        &self,
        stream: SharedBundleStream,
        crc: u32,
        _read_buffer_size: u32,
    ) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        stream
            .lock()
            .expect("bundle stream lock")
            .read_to_end(&mut data)?;
        verify_crc(crc, &data)?;
        Ok(data)
    }

    fn load_from_stream_async(
        &self,
        stream: SharedBundleStream,
        crc: u32,
        read_buffer_size: u32,
    ) -> Result<Self::Request> {
        let loader = self.clone();
        PendingBundle::spawn(move || loader.load_from_stream(stream, crc, read_buffer_size))
    }

    fn load_from_file_at_offset(&self, path: &Path, crc: u32, offset: u64) -> Result<Vec<u8>> {
        let data = std::fs::read(path)?;
        if (data.len() as u64) < offset {
            return Err(CloakError::LoadFailed {
                reason: format!("bundle shorter than offset {offset}"),
            });
        }
        let content = data[offset as usize..].to_vec();
        verify_crc(crc, &content)?;
        Ok(content)
    }

    fn load_from_file_at_offset_async(
        &self,
        path: &Path,
        crc: u32,
        offset: u64,
    ) -> Result<Self::Request> {
        let loader = self.clone();
        let path = path.to_path_buf();
        PendingBundle::spawn(move || loader.load_from_file_at_offset(&path, crc, offset))
    }
}

/// Write `content`, encrypt it with `encryptor`, and persist the
/// obfuscated bytes next to it. Returns the obfuscated path.
fn write_encrypted(
    dir: &Path,
    name: &str,
    content: &[u8],
    encryptor: &dyn EncryptionProvider,
) -> PathBuf {
    let plain = dir.join(name);
    std::fs::write(&plain, content).unwrap();
    let result = encryptor.encrypt(&EncryptFileInfo::new(&plain)).unwrap();
    assert!(result.encrypted);
    let obfuscated = dir.join(format!("{name}.cloak"));
    std::fs::write(&obfuscated, &result.encrypted_data).unwrap();
    obfuscated
}

#[test]
fn stream_scheme_round_trips_through_loader() {
    let dir = tempfile::tempdir().unwrap();
    let original = b"scene geometry, textures, the lot".to_vec();
    let path = write_encrypted(dir.path(), "scene.bundle", &original, &StreamCipherEncryptor);

    let decryptor = StreamDecryptor::new(MemoryLoader);
    let result = decryptor
        .load_bundle(&DecryptFileInfo::new(&path, checksum(&original)))
        .unwrap();

    assert_eq!(result.handle, Some(original));
    assert!(result.request.is_none());
    assert!(result.managed_stream.is_some());
}

#[test]
fn offset_scheme_round_trips_through_loader() {
    let dir = tempfile::tempdir().unwrap();
    let original: Vec<u8> = (0..=255).collect();
    let path = write_encrypted(dir.path(), "atlas.bundle", &original, &OffsetEncryptor);

    let obfuscated_len = std::fs::metadata(&path).unwrap().len();
    assert_eq!(obfuscated_len, original.len() as u64 + BUNDLE_OFFSET);

    let decryptor = OffsetDecryptor::new(MemoryLoader);
    let result = decryptor
        .load_bundle(&DecryptFileInfo::new(&path, checksum(&original)))
        .unwrap();

    assert_eq!(result.handle, Some(original));
    // Direct file reads at an offset need no managed stream.
    assert!(result.managed_stream.is_none());
}

#[test]
fn async_load_yields_same_handle_as_sync() {
    let dir = tempfile::tempdir().unwrap();
    let original = b"async and sync must agree".to_vec();
    let path = write_encrypted(dir.path(), "agree.bundle", &original, &StreamCipherEncryptor);

    let decryptor = StreamDecryptor::new(MemoryLoader);
    let info = DecryptFileInfo::new(&path, checksum(&original));

    let sync_handle = decryptor.load_bundle(&info).unwrap().handle.unwrap();

    let pending = decryptor.load_bundle_async(&info).unwrap();
    assert!(pending.handle.is_none());
    assert!(pending.managed_stream.is_some());
    // Pending results are debuggable as a whole, request included.
    assert!(format!("{pending:?}").contains("request"));

    let request = pending.request.unwrap();
    while !request.is_finished() {
        std::thread::sleep(std::time::Duration::from_millis(1));
    }
    let async_handle = request.wait().unwrap();

    assert_eq!(sync_handle, async_handle);
}

#[test]
fn offset_async_load_matches_sync() {
    let dir = tempfile::tempdir().unwrap();
    let original = vec![7u8; 100];
    let path = write_encrypted(dir.path(), "flat.bundle", &original, &OffsetEncryptor);

    let decryptor = OffsetDecryptor::new(MemoryLoader);
    let info = DecryptFileInfo::new(&path, 0);

    let sync_handle = decryptor.load_bundle(&info).unwrap().handle.unwrap();
    let request = decryptor.load_bundle_async(&info).unwrap().request.unwrap();

    assert_eq!(request.wait().unwrap(), sync_handle);
}

#[test]
fn missing_file_fails_without_leaking_a_stream() {
    let decryptor = StreamDecryptor::new(MemoryLoader);
    let info = DecryptFileInfo::new("/no/such/path.bundle.cloak", 0);

    let err = decryptor.load_bundle(&info).unwrap_err();
    assert!(matches!(err, CloakError::FileNotFound { .. }));

    let err = decryptor.load_bundle_async(&info).unwrap_err();
    assert!(matches!(err, CloakError::FileNotFound { .. }));

    let offset_decryptor = OffsetDecryptor::new(MemoryLoader);
    let err = offset_decryptor.load_bundle(&info).unwrap_err();
    assert!(matches!(err, CloakError::Io(_)));
}

#[test]
fn crc_mismatch_surfaces_from_the_loader() {
    let dir = tempfile::tempdir().unwrap();
    let original = b"checked content".to_vec();
    let path = write_encrypted(dir.path(), "crc.bundle", &original, &StreamCipherEncryptor);

    let decryptor = StreamDecryptor::new(MemoryLoader);
    let err = decryptor
        .load_bundle(&DecryptFileInfo::new(&path, 0xDEAD_BEEF))
        .unwrap_err();

    assert!(matches!(err, CloakError::ChecksumMismatch { .. }));
}

#[test]
fn raw_reads_are_not_implemented_on_either_scheme() {
    let info = DecryptFileInfo::new("irrelevant.bundle", 0);

    let stream = StreamDecryptor::new(MemoryLoader);
    assert!(matches!(
        stream.read_raw_bytes(&info).unwrap_err(),
        CloakError::NotImplemented { .. }
    ));
    assert!(matches!(
        stream.read_raw_text(&info).unwrap_err(),
        CloakError::NotImplemented { .. }
    ));

    let offset = OffsetDecryptor::new(MemoryLoader);
    assert!(matches!(
        offset.read_raw_bytes(&info).unwrap_err(),
        CloakError::NotImplemented { .. }
    ));
    assert!(matches!(
        offset.read_raw_text(&info).unwrap_err(),
        CloakError::NotImplemented { .. }
    ));
}

#[test]
fn empty_bundle_round_trips_on_both_schemes() {
    let dir = tempfile::tempdir().unwrap();

    let stream_path = write_encrypted(dir.path(), "empty-s.bundle", &[], &StreamCipherEncryptor);
    let handle = StreamDecryptor::new(MemoryLoader)
        .load_bundle(&DecryptFileInfo::new(&stream_path, 0))
        .unwrap()
        .handle
        .unwrap();
    assert!(handle.is_empty());

    let offset_path = write_encrypted(dir.path(), "empty-o.bundle", &[], &OffsetEncryptor);
    assert_eq!(
        std::fs::metadata(&offset_path).unwrap().len(),
        BUNDLE_OFFSET
    );
    let handle = OffsetDecryptor::new(MemoryLoader)
        .load_bundle(&DecryptFileInfo::new(&offset_path, 0))
        .unwrap()
        .handle
        .unwrap();
    assert!(handle.is_empty());
}

#[test]
fn managed_stream_outlives_the_decrypt_result() {
    let dir = tempfile::tempdir().unwrap();
    let original = b"still open".to_vec();
    let path = write_encrypted(dir.path(), "alive.bundle", &original, &StreamCipherEncryptor);

    let decryptor = StreamDecryptor::new(MemoryLoader);
    let result = decryptor.load_bundle(&DecryptFileInfo::new(&path, 0)).unwrap();

    // A loader keeping its clone alive can still read after the result
    // (and its stream reference) is gone.
    let stream = result.managed_stream.clone().unwrap();
    drop(result);

    use std::io::{Seek, SeekFrom};
    let mut guard = stream.lock().unwrap();
    guard.seek(SeekFrom::Start(0)).unwrap();
    let mut data = Vec::new();
    guard.read_to_end(&mut data).unwrap();
    assert_eq!(data, original);
}
