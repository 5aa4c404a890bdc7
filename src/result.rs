use serde_json::{Value, json};

/// Either half of a dispatcher response, serialised as-is into JSON.
pub enum GenericResult<T, E> {
    Ok(T),
    Err(E),
}

impl<T, E> GenericResult<T, E> {
    pub fn ok(value: T) -> Self {
        GenericResult::Ok(value)
    }

    pub fn err(error: E) -> Self {
        GenericResult::Err(error)
    }
}

impl<T, E> From<GenericResult<T, E>> for Value
where
    T: serde::Serialize,
    E: serde::Serialize,
{
    fn from(res: GenericResult<T, E>) -> Self {
        let converted = match res {
            GenericResult::Ok(v) => serde_json::to_value(v),
            GenericResult::Err(e) => serde_json::to_value(e),
        };
        converted.unwrap_or_else(|e| json!({ "error": e.to_string() }))
    }
}
