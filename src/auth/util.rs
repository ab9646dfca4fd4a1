//!
//! Parsing of JWT settings read from environment
//!

use anyhow::anyhow;
use jsonwebtoken::{Algorithm, DecodingKey};
use std::str::FromStr;

///
/// Parses comma separated list of algorithms, e.g. `HS256,HS384`
///
pub fn parse_jwt_algorithms(jwt_algorithms: String) -> anyhow::Result<Vec<Algorithm>> {
    jwt_algorithms
        .split(',')
        .map(str::trim)
        .map(|algorithm| {
            Algorithm::from_str(algorithm).map_err(|err| anyhow!("invalid algorithm: {err}"))
        })
        .collect()
}

#[derive(Debug, PartialEq, Eq)]
enum AlgorithmFamily {
    Hmac,
    Rsa,
    Ec,
    Ed,
}

impl From<&Algorithm> for AlgorithmFamily {
    fn from(algorithm: &Algorithm) -> Self {
        match algorithm {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => AlgorithmFamily::Hmac,
            Algorithm::RS256
            | Algorithm::RS384
            | Algorithm::RS512
            | Algorithm::PS256
            | Algorithm::PS384
            | Algorithm::PS512 => AlgorithmFamily::Rsa,
            Algorithm::ES256 | Algorithm::ES384 => AlgorithmFamily::Ec,
            Algorithm::EdDSA => AlgorithmFamily::Ed,
        }
    }
}

///
/// Single key is used for all algorithms, so they must share its family
///
pub fn validate_jwt_algorithms_family(jwt_algorithms: &[Algorithm]) -> anyhow::Result<()> {
    let Some((first, rest)) = jwt_algorithms.split_first() else {
        return Err(anyhow!("at least one jwt algorithm is required"));
    };

    let family = AlgorithmFamily::from(first);
    if let Some(other) = rest.iter().find(|a| AlgorithmFamily::from(*a) != family) {
        return Err(anyhow!(
            "jwt algorithms {first:?} and {other:?} belong to different families"
        ));
    }

    Ok(())
}

///
/// Creates key matching algorithm family.
/// HMAC keys are plain secrets, all other keys are PEM encoded.
///
pub fn parse_jwt_key(jwt_algorithm: &Algorithm, jwt_key: String) -> anyhow::Result<DecodingKey> {
    let jwt_key_bytes = jwt_key.as_bytes();

    let key = match jwt_algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {
            DecodingKey::from_secret(jwt_key_bytes)
        }
        Algorithm::ES256 | Algorithm::ES384 => DecodingKey::from_ec_pem(jwt_key_bytes)
            .map_err(|err| anyhow!("invalid ec pem key: {err}"))?,
        Algorithm::RS256
        | Algorithm::RS384
        | Algorithm::RS512
        | Algorithm::PS256
        | Algorithm::PS384
        | Algorithm::PS512 => DecodingKey::from_rsa_pem(jwt_key_bytes)
            .map_err(|err| anyhow!("invalid rsa pem key: {err}"))?,
        Algorithm::EdDSA => DecodingKey::from_ed_pem(jwt_key_bytes)
            .map_err(|err| anyhow!("invalid ed pem key: {err}"))?,
    };

    Ok(key)
}
