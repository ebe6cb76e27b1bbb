//! ECDSA signatures over secp256k1.
//!
//! Public keys are exchanged in compressed form (SEC 1, Version 2.0, Section 2.3.3), signatures
//! are generated deterministically as specified in
//! [RFC 6979](https://datatracker.ietf.org/doc/html/rfc6979), and only signatures normalized
//! according to
//! [BIP 62](https://github.com/bitcoin/bips/blob/master/bip-0062.mediawiki#low-s-values-in-signatures)
//! are accepted.
//!
//! # Example
//! ```rust
//! use sigil_signing::{Context, Key, Secp256k1};
//! use rand::rngs::OsRng;
//!
//! // Generate a new private key
//! let context = Secp256k1::new();
//! let private_key = context.random_private_key(&mut OsRng);
//!
//! // Sign a payload
//! let signature = context.sign(b"hello, world!", &private_key).unwrap();
//!
//! // Verify the signature with the re-imported public key
//! let encoded = context.public_key(&private_key).unwrap().to_hex();
//! let public_key = sigil_signing::secp256k1::PublicKey::from_hex(&encoded).unwrap();
//! assert!(context.verify(&signature, b"hello, world!", &public_key).unwrap());
//! ```

mod scheme;

pub use scheme::{PrivateKey, PublicKey, Secp256k1};
