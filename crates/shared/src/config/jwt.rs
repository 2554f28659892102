use crate::{abstract_trait::JwtServiceTrait, errors::AuthError};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
    pub token_type: String,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub jwt_secret: String,
}

impl JwtConfig {
    pub fn new(jwt_secret: &str) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(&self, user_id: &str, token_type: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let iat = now.timestamp() as usize;
        let exp = match token_type {
            "access" => (now + Duration::minutes(60)).timestamp() as usize,
            "refresh" => (now + Duration::days(7)).timestamp() as usize,
            _ => return Err(AuthError::InvalidTokenType),
        };

        let claims = Claims {
            sub: user_id.to_string(),
            exp,
            iat,
            token_type: token_type.to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(AuthError::Jwt)
    }

    fn verify_token(&self, token: &str, expected_type: &str) -> Result<String, AuthError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let token_data =
            decode::<Claims>(token, &decoding_key, &Validation::default()).map_err(AuthError::Jwt)?;

        if token_data.claims.exp < Utc::now().timestamp() as usize {
            return Err(AuthError::TokenExpired);
        }

        if token_data.claims.token_type != expected_type {
            return Err(AuthError::InvalidTokenType);
        }

        Ok(token_data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_round_trips() {
        let jwt = JwtConfig::new("test-secret");
        let token = jwt.generate_token("42", "access").unwrap();
        assert_eq!(jwt.verify_token(&token, "access").unwrap(), "42");
    }

    #[test]
    fn token_type_mismatch_is_rejected() {
        let jwt = JwtConfig::new("test-secret");
        let token = jwt.generate_token("42", "refresh").unwrap();
        assert!(matches!(
            jwt.verify_token(&token, "access"),
            Err(AuthError::InvalidTokenType)
        ));
    }

    #[test]
    fn unknown_token_type_is_rejected_at_issue() {
        let jwt = JwtConfig::new("test-secret");
        assert!(matches!(
            jwt.generate_token("42", "session"),
            Err(AuthError::InvalidTokenType)
        ));
    }

    #[test]
    fn foreign_secret_is_rejected() {
        let issuer = JwtConfig::new("secret-a");
        let verifier = JwtConfig::new("secret-b");
        let token = issuer.generate_token("42", "access").unwrap();
        assert!(verifier.verify_token(&token, "access").is_err());
    }
}
