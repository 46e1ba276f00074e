//! AES in [counter mode][1] (CTR).
//!
//! CTR mode turns the AES block cipher into a stream cipher: successive
//! values of a 16-byte counter block are encrypted to produce keystream,
//! which is XORed into the data. Decryption applies the exact same
//! keystream XOR as encryption.
//!
//! The counter block starts as the caller's nonce (8, 12, or 16 bytes)
//! left-aligned over zeros, and is incremented as a big-endian integer
//! after every keystream block. A 16-byte nonce supplies the entire
//! initial counter value.
//!
//! # ⚠️ Security Warning: [Hazmat!]
//!
//! This crate does not ensure ciphertexts are authentic! Thus ciphertext
//! integrity is not verified, which can lead to serious vulnerabilities!
//!
//! Reusing a (key, nonce) pair for more than one message reveals the XOR
//! of the plaintexts. With a 16-byte nonce the caller also takes on
//! keeping the counter from wrapping back into already-used values under
//! the same key.
//!
//! # Usage example
//!
//! ```
//! let key = [0x42; 32];
//! let mut nonce = [0u8; 12];
//!
//! let ciphertext = aes_ctr::encrypt(b"hello world", &nonce, &key)?;
//! let plaintext = aes_ctr::decrypt(&ciphertext, &nonce, &key)?;
//! assert_eq!(plaintext, b"hello world");
//!
//! // advance the nonce before the next message under the same key
//! aes_ctr::counter::increment(&mut nonce);
//! # Ok::<(), aes_ctr::InvalidArgument>(())
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/Block_cipher_mode_of_operation#Counter_(CTR)
//! [Hazmat!]: https://github.com/RustCrypto/meta/blob/master/HAZMAT.md

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use cipher;

use aes::Aes256;
use alloc::{vec, vec::Vec};
use cipher::{consts::U16, generic_array::GenericArray, BlockEncrypt, BlockSizeUser, KeyInit};
use core::convert::TryInto;

pub mod counter;
mod errors;

pub use errors::InvalidArgument;

/// Width of one AES block, and of the counter block, in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES-256 key length in bytes.
pub const KEY_SIZE: usize = 32;

/// Nonce lengths accepted by [`encrypt`] and [`decrypt`].
pub const NONCE_SIZES: [usize; 3] = [8, 12, 16];

/// Encrypts `message` with AES-256 in counter mode.
///
/// The nonce must never be reused with the same key. Nonces shorter than
/// [`BLOCK_SIZE`] are zero-extended to form the initial counter block; a
/// 16-byte nonce is used verbatim as the initial counter value, which
/// leaves uniqueness and non-wraparound entirely to the caller.
///
/// Returns a freshly allocated ciphertext of the same length as
/// `message`; none of the inputs are mutated.
///
/// # Errors
///
/// Returns [`InvalidArgument`] if `message` is empty, the nonce is not 8,
/// 12, or 16 bytes, or the key is not [`KEY_SIZE`] bytes. All validation
/// happens before any cipher work.
pub fn encrypt(message: &[u8], nonce: &[u8], key: &[u8]) -> Result<Vec<u8>, InvalidArgument> {
    if message.is_empty() {
        return Err(InvalidArgument::EmptyMessage);
    }
    if !NONCE_SIZES.contains(&nonce.len()) {
        return Err(InvalidArgument::NonceLength(nonce.len()));
    }
    if key.len() != KEY_SIZE {
        return Err(InvalidArgument::KeyLength(key.len()));
    }
    let cipher = Aes256::new(GenericArray::from_slice(key));
    Ok(transform(&cipher, nonce, message))
}

/// Decrypts `ciphertext` with AES-256 in counter mode.
///
/// CTR decryption is the same keystream XOR as encryption, under the same
/// argument contract as [`encrypt`].
///
/// # Errors
///
/// Identical to [`encrypt`].
pub fn decrypt(ciphertext: &[u8], nonce: &[u8], key: &[u8]) -> Result<Vec<u8>, InvalidArgument> {
    encrypt(ciphertext, nonce, key)
}

/// Runs the CTR keystream over `message` under an initialized block cipher.
///
/// Keystream is produced a full block at a time; only the leading bytes of
/// the final block are used when the message length is not a multiple of
/// [`BLOCK_SIZE`].
fn transform<C>(cipher: &C, nonce: &[u8], message: &[u8]) -> Vec<u8>
where
    C: BlockEncrypt + BlockSizeUser<BlockSize = U16>,
{
    let mut counter = counter::block_from_nonce(nonce);
    let blocks = (message.len() + BLOCK_SIZE - 1) / BLOCK_SIZE;

    let mut keystream = vec![0u8; blocks * BLOCK_SIZE];
    for block in keystream.chunks_exact_mut(BLOCK_SIZE) {
        cipher.encrypt_block_b2b(
            GenericArray::from_slice(&counter),
            GenericArray::from_mut_slice(block),
        );
        counter::increment(&mut counter);
    }

    let mut output = message.to_vec();
    let len = output.len();
    xor(&mut output, &keystream[..len]);
    output
}

/// XORs `key` into `buf`, a u64 word at a time with a byte-wise tail.
#[inline(always)]
fn xor(buf: &mut [u8], key: &[u8]) {
    debug_assert_eq!(buf.len(), key.len());
    let mut words = buf.chunks_exact_mut(8);
    let mut key_words = key.chunks_exact(8);
    for (a, b) in (&mut words).zip(&mut key_words) {
        let v = u64::from_ne_bytes((&*a).try_into().unwrap())
            ^ u64::from_ne_bytes(b.try_into().unwrap());
        a.copy_from_slice(&v.to_ne_bytes());
    }
    for (a, b) in words.into_remainder().iter_mut().zip(key_words.remainder()) {
        *a ^= *b;
    }
}
