    use super::*;

    const KEY: [u8; KEY_LEN] = [7; KEY_LEN];

    fn claims(org: &str) -> SessionClaims {
        SessionClaims {
            org_id: org.to_string(),
            iat: 1_700_000_000,
        }
    }

    #[test]
    fn minted_token_verifies_and_decodes() {
        let token = mint(&claims("acme"), &KEY).unwrap();
        assert_eq!(token.split('.').count(), 3);
        assert_eq!(verify(&token, &KEY).unwrap(), claims("acme"));
        assert_eq!(decode_claims(&token).unwrap().org_id, "acme");
    }

    #[test]
    fn wrong_key_or_tampered_claims_fail_verification() {
        let token = mint(&claims("acme"), &KEY).unwrap();
        assert!(matches!(verify(&token, &[8; KEY_LEN]), Err(TokenError::Signature)));

        let forged = mint(&claims("evil"), &[9; KEY_LEN]).unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        let forged_claims = forged.split('.').nth(1).unwrap();
        parts[1] = forged_claims;
        let spliced = parts.join(".");
        assert!(matches!(verify(&spliced, &KEY), Err(TokenError::Signature)));
        // Decoding alone does not check the MAC.
        assert_eq!(decode_claims(&spliced).unwrap().org_id, "evil");
    }

    #[test]
    fn malformed_tokens_are_classified() {
        assert!(matches!(decode_claims("abc"), Err(TokenError::Shape)));
        assert!(matches!(decode_claims("a.b.c.d"), Err(TokenError::Shape)));
        assert!(matches!(decode_claims("a.!!.c"), Err(TokenError::Encoding(_))));

        let not_json = format!("h.{}.s", URL_SAFE_NO_PAD.encode("hello"));
        assert!(matches!(decode_claims(&not_json), Err(TokenError::Claims(_))));

        let blank = format!("h.{}.s", URL_SAFE_NO_PAD.encode(r#"{"org_id":" ","iat":0}"#));
        assert!(matches!(decode_claims(&blank), Err(TokenError::EmptyOrg)));
    }

    #[test]
    fn empty_org_cannot_be_minted() {
        assert!(matches!(mint(&claims(""), &KEY), Err(TokenError::EmptyOrg)));
    }
