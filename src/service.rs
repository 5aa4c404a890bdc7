use std::borrow::Cow;

use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::{caesar, result::GenericResult};

#[repr(i32)]
#[derive(Serialize_repr, Deserialize_repr, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    #[default]
    Success = 0,
    EncodeError = -1,
    DecodeError = -2,
    UnknownMethodError = -3,
    InvalidArgumentsError = -4,
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct CipherOk<'a> {
    code: Code,
    pub result: Cow<'a, str>,
}

impl<'a> CipherOk<'a> {
    fn success(result: Cow<'a, str>) -> Self {
        CipherOk {
            code: Code::Success,
            result,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct CipherFailure<'a> {
    code: Code,
    error: Cow<'a, str>,
}

impl<'a> CipherFailure<'a> {
    fn error(code: Code, error: Cow<'a, str>) -> Self {
        CipherFailure { code, error }
    }
}

pub type CipherResult<'a> = GenericResult<CipherOk<'a>, CipherFailure<'a>>;

#[derive(serde::Deserialize)]
struct Param<'a> {
    #[serde(default)]
    input: Cow<'a, str>,
    #[serde(default)]
    offset: i64,
}

/// Method dispatcher answering JSON requests with `{code, result}` or
/// `{code, error}` documents.
pub struct Cipher;

impl Cipher {
    fn wrap_result<'a, E: ToString>(res: Result<String, E>, rc: Code) -> CipherResult<'a> {
        match res {
            Ok(s) => CipherResult::ok(CipherOk::success(Cow::Owned(s))),
            Err(e) => CipherResult::err(CipherFailure::error(rc, Cow::Owned(e.to_string()))),
        }
    }

    pub fn encode<'a>(input: Cow<'a, str>, offset: i64) -> CipherResult<'a> {
        log::info!("Encoding input with offset {offset}.");
        Self::wrap_result(caesar::encode(&input, offset), Code::EncodeError)
    }

    pub fn decode<'a>(input: Cow<'a, str>, offset: i64) -> CipherResult<'a> {
        log::info!("Decoding input with offset {offset}.");
        Self::wrap_result(caesar::decode(&input, offset), Code::DecodeError)
    }

    pub fn call(&self, method: &str, args: &Value) -> Value {
        let param: Param = match serde_json::from_value(args.clone()) {
            Ok(p) => p,
            Err(e) => {
                log::error!("Invalid arguments for {method}: {e}");
                return CipherResult::err(CipherFailure::error(
                    Code::InvalidArgumentsError,
                    Cow::Owned(e.to_string()),
                ))
                .into();
            }
        };

        match method {
            "encode" => Cipher::encode(param.input, param.offset).into(),
            "decode" => Cipher::decode(param.input, param.offset).into(),
            _ => {
                let msg = format!("Unknown method called: {method}");
                log::warn!("{msg}");
                CipherResult::err(CipherFailure::error(
                    Code::UnknownMethodError,
                    Cow::Borrowed(&msg),
                ))
                .into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cipher, Code};
    use serde_json::json;

    #[test]
    fn encode_then_decode_through_dispatcher() {
        let cipher = Cipher;

        let encoded = cipher.call("encode", &json!({ "input": "Hello, world!", "offset": 42 }));
        assert_eq!(encoded, json!({ "code": 0, "result": "r077:VJB:=7/K" }));

        let decoded = cipher.call(
            "decode",
            &json!({ "input": encoded["result"], "offset": 42 }),
        );
        assert_eq!(decoded, json!({ "code": 0, "result": "Hello, world!" }));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let cipher = Cipher;
        assert_eq!(
            cipher.call("encode", &json!({ "input": "abc" })),
            json!({ "code": 0, "result": "abc" })
        );
        assert_eq!(
            cipher.call("decode", &json!({})),
            json!({ "code": 0, "result": "" })
        );
    }

    #[test]
    fn out_of_alphabet_maps_to_method_code() {
        let cipher = Cipher;

        let res = cipher.call("encode", &json!({ "input": "a\u{1}", "offset": 1 }));
        assert_eq!(res["code"], json!(Code::EncodeError as i32));
        assert!(res["error"].as_str().unwrap().contains("position 1"));

        let res = cipher.call("decode", &json!({ "input": "\n", "offset": 1 }));
        assert_eq!(res["code"], json!(-2));
    }

    #[test]
    fn rejects_unknown_method_and_bad_arguments() {
        let cipher = Cipher;

        let res = cipher.call("rot13", &json!({ "input": "abc" }));
        assert_eq!(res["code"], json!(-3));
        assert_eq!(res["error"], json!("Unknown method called: rot13"));

        let res = cipher.call("encode", &json!({ "input": "abc", "offset": "forty-two" }));
        assert_eq!(res["code"], json!(-4));

        let res = cipher.call("encode", &json!("not an object"));
        assert_eq!(res["code"], json!(Code::InvalidArgumentsError as i32));
    }
}
