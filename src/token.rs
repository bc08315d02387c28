use serde_json::Value;

use crate::error::InspectError;
use crate::segment::{SegmentKind, decode_segment};

/// The three dot-separated parts of a compact JWT, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub header: &'a str,
    pub payload: &'a str,
    pub signature: &'a str,
}

impl<'a> Token<'a> {
    pub fn parse(input: &'a str) -> Result<Self, InspectError> {
        let parts: Vec<&str> = input.split('.').collect();
        match parts[..] {
            [header, payload, signature] => Ok(Token {
                header,
                payload,
                signature,
            }),
            _ => Err(InspectError::Format { parts: parts.len() }),
        }
    }

    pub fn decode_header(&self) -> Result<Value, InspectError> {
        decode_claims(SegmentKind::Header, self.header)
    }

    pub fn decode_payload(&self) -> Result<Value, InspectError> {
        decode_claims(SegmentKind::Payload, self.payload)
    }
}

pub fn parse_structured(kind: SegmentKind, text: &str) -> Result<Value, InspectError> {
    serde_json::from_str(text).map_err(|source| InspectError::Parse { kind, source })
}

fn decode_claims(kind: SegmentKind, segment: &str) -> Result<Value, InspectError> {
    let text = decode_segment(kind, segment)?;
    log::debug!("[decode_claims] {kind} decoded to {} bytes of text", text.len());
    parse_structured(kind, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
    use serde_json::json;

    const SAMPLE: &str = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0.sig";

    fn encode_json(value: &Value) -> String {
        URL_SAFE_NO_PAD.encode(value.to_string())
    }

    #[test]
    fn test_parse_three_parts() {
        let token = Token::parse(SAMPLE).unwrap();
        assert_eq!(token.header, "eyJhbGciOiJIUzI1NiJ9");
        assert_eq!(token.payload, "eyJzdWIiOiIxMjM0NTY3ODkwIn0");
        assert_eq!(token.signature, "sig");
    }

    #[test]
    fn test_parse_wrong_part_count() {
        for (input, parts) in [("", 1), ("abc", 1), ("a.b", 2), ("a.b.c.d", 4), ("....", 5)] {
            match Token::parse(input) {
                Err(InspectError::Format { parts: found }) => {
                    assert_eq!(found, parts, "Wrong part count for {input:?}")
                }
                other => panic!("Expected format error for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_allows_empty_signature() {
        let token = Token::parse("a.b.").unwrap();
        assert_eq!(token.signature, "");
    }

    #[test]
    fn test_decode_sample() {
        let token = Token::parse(SAMPLE).unwrap();
        assert_eq!(token.decode_header().unwrap(), json!({ "alg": "HS256" }));
        assert_eq!(token.decode_payload().unwrap(), json!({ "sub": "1234567890" }));
        assert_eq!(token.signature, "sig");
    }

    #[test]
    fn test_round_trip_nested_claims() {
        let header = json!({ "typ": "JWT", "alg": "RS256", "kid": "key-1" });
        let payload = json!({
            "iss": "https://issuer.example",
            "aud": ["a", "b"],
            "exp": 1_700_000_000,
            "admin": true,
            "scope": null,
            "ratio": 0.5,
            "ext": { "tenant": { "id": 7 } }
        });
        let input = format!("{}.{}.not+even/base64", encode_json(&header), encode_json(&payload));

        let token = Token::parse(&input).unwrap();
        assert_eq!(token.decode_header().unwrap(), header);
        assert_eq!(token.decode_payload().unwrap(), payload);
        assert_eq!(token.signature, "not+even/base64");
    }

    #[test]
    fn test_non_object_documents_accepted() {
        let input = format!(
            "{}.{}.x",
            URL_SAFE_NO_PAD.encode("[1,2,3]"),
            URL_SAFE_NO_PAD.encode("\"text\"")
        );
        let token = Token::parse(&input).unwrap();
        assert_eq!(token.decode_header().unwrap(), json!([1, 2, 3]));
        assert_eq!(token.decode_payload().unwrap(), json!("text"));
    }

    #[test]
    fn test_header_not_json() {
        let input = format!("{}.%%%.sig", URL_SAFE_NO_PAD.encode("not json"));
        let err = Token::parse(&input).unwrap().decode_header().unwrap_err();
        assert!(matches!(
            err,
            InspectError::Parse {
                kind: SegmentKind::Header,
                ..
            }
        ));
    }

    #[test]
    fn test_payload_decode_error() {
        let input = "eyJhbGciOiJIUzI1NiJ9.%%%.sig";
        let err = Token::parse(input).unwrap().decode_payload().unwrap_err();
        assert!(matches!(
            err,
            InspectError::Decode {
                kind: SegmentKind::Payload,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_structured_rejects_trailing_garbage() {
        assert!(parse_structured(SegmentKind::Header, r#"{"a":1} x"#).is_err());
        assert!(parse_structured(SegmentKind::Header, "").is_err());
        assert!(parse_structured(SegmentKind::Header, "  {}  ").is_ok());
    }
}
