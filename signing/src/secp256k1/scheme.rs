use crate::{Context, Error, Key};
use k256::{
    ecdsa::{
        signature::{DigestSigner, DigestVerifier},
        Signature, SigningKey, VerifyingKey,
    },
    elliptic_curve::scalar::IsHigh,
};
use rand::{CryptoRng, Rng};
use sha2::{Digest, Sha256};
use sigil_utils::{from_hex, hex};
use std::{
    fmt::{self, Debug, Display},
    ops::Deref,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

const CURVE_NAME: &str = "secp256k1";
const PRIVATE_KEY_LENGTH: usize = 32;
const PUBLIC_KEY_LENGTH: usize = 33; // Y-Parity || X
const SIGNATURE_LENGTH: usize = 64; // R || S

/// ECDSA private key over secp256k1 (a scalar in `[1, n - 1]`).
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    raw: [u8; PRIVATE_KEY_LENGTH],
}

impl crate::PrivateKey for PrivateKey {}

impl Key for PrivateKey {
    const ALGORITHM: &'static str = CURVE_NAME;

    fn from_hex(encoded: &str) -> Result<Self, Error> {
        Self::try_from(from_hex(encoded)?)
    }
}

impl TryFrom<&[u8]> for PrivateKey {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let raw: [u8; PRIVATE_KEY_LENGTH] = value
            .try_into()
            .map_err(|_| Error::InvalidPrivateKeyLength)?;
        // Reject scalars outside [1, n - 1] before accepting the bytes.
        SigningKey::from_slice(&raw).map_err(|_| Error::InvalidPrivateKey)?;
        Ok(Self { raw })
    }
}

impl TryFrom<&Vec<u8>> for PrivateKey {
    type Error = Error;

    fn try_from(value: &Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(value.as_slice())
    }
}

impl TryFrom<Vec<u8>> for PrivateKey {
    type Error = Error;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(value.as_slice())
    }
}

impl AsRef<[u8]> for PrivateKey {
    fn as_ref(&self) -> &[u8] {
        &self.raw
    }
}

impl Deref for PrivateKey {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.raw
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex(&self.raw))
    }
}

impl Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex(&self.raw))
    }
}

/// ECDSA public key over secp256k1 (SEC 1 compressed).
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PublicKey {
    raw: [u8; PUBLIC_KEY_LENGTH],
}

impl crate::PublicKey for PublicKey {}

impl Key for PublicKey {
    const ALGORITHM: &'static str = CURVE_NAME;

    fn from_hex(encoded: &str) -> Result<Self, Error> {
        Self::try_from(from_hex(encoded)?)
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let raw: [u8; PUBLIC_KEY_LENGTH] = value
            .try_into()
            .map_err(|_| Error::InvalidPublicKeyLength)?;
        // Reject encodings that do not name a point on the curve.
        VerifyingKey::from_sec1_bytes(&raw).map_err(|_| Error::InvalidPublicKey)?;
        Ok(Self { raw })
    }
}

impl TryFrom<&Vec<u8>> for PublicKey {
    type Error = Error;

    fn try_from(value: &Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(value.as_slice())
    }
}

impl TryFrom<Vec<u8>> for PublicKey {
    type Error = Error;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(value.as_slice())
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.raw
    }
}

impl Deref for PublicKey {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.raw
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex(&self.raw))
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex(&self.raw))
    }
}

/// ECDSA over secp256k1 with SHA-256 payload digests.
#[derive(Clone, Copy, Debug, Default)]
pub struct Secp256k1;

impl Secp256k1 {
    /// Creates a new context.
    pub fn new() -> Self {
        Self
    }
}

impl Context for Secp256k1 {
    type PrivateKey = PrivateKey;
    type PublicKey = PublicKey;

    const ALGORITHM: &'static str = CURVE_NAME;

    fn sign(&self, payload: &[u8], private_key: &Self::PrivateKey) -> Result<String, Error> {
        let signer =
            SigningKey::from_slice(&private_key.raw).map_err(|_| Error::InvalidPrivateKey)?;
        let signature: Signature = signer
            .try_sign_digest(Sha256::new_with_prefix(payload))
            .map_err(|_| Error::InvalidSignature)?;
        let signature = match signature.normalize_s() {
            Some(normalized) => normalized,
            None => signature,
        };
        Ok(hex(&signature.to_vec()))
    }

    fn verify(
        &self,
        signature: &str,
        payload: &[u8],
        public_key: &Self::PublicKey,
    ) -> Result<bool, Error> {
        let raw = from_hex(signature)?;
        let raw: [u8; SIGNATURE_LENGTH] = raw
            .as_slice()
            .try_into()
            .map_err(|_| Error::InvalidSignature)?;
        let signature = Signature::from_slice(&raw).map_err(|_| Error::InvalidSignature)?;
        if signature.s().is_high().into() {
            // Reject any signatures with a `s` value in the upper half of the curve order.
            return Err(Error::InvalidSignature);
        }
        let verifier =
            VerifyingKey::from_sec1_bytes(&public_key.raw).map_err(|_| Error::InvalidPublicKey)?;
        Ok(verifier
            .verify_digest(Sha256::new_with_prefix(payload), &signature)
            .is_ok())
    }

    fn public_key(&self, private_key: &Self::PrivateKey) -> Result<Self::PublicKey, Error> {
        let signer =
            SigningKey::from_slice(&private_key.raw).map_err(|_| Error::InvalidPrivateKey)?;
        let point = signer.verifying_key().to_encoded_point(true);
        let raw: [u8; PUBLIC_KEY_LENGTH] = point
            .as_bytes()
            .try_into()
            .map_err(|_| Error::InvalidPublicKey)?;
        Ok(PublicKey { raw })
    }

    fn random_private_key<R: Rng + CryptoRng>(&self, rng: &mut R) -> Self::PrivateKey {
        let mut raw = [0u8; PRIVATE_KEY_LENGTH];
        loop {
            rng.fill_bytes(&mut raw);
            // Candidates outside [1, n - 1] are redrawn.
            if SigningKey::from_slice(&raw).is_ok() {
                return PrivateKey { raw };
            }
        }
    }
}
