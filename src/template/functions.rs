// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Custom template helpers.
//!
//! Each helper is registered both as a filter and as a function so templates
//! can write `{{ x | deref }}` or `{{ deref(x) }}` interchangeably.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use minijinja::value::ValueKind;
use minijinja::{Environment, Error, ErrorKind, Value};
use std::collections::BTreeMap;

/// Register the custom helpers on `env`
pub fn register(env: &mut Environment<'_>) {
    env.add_filter("deref", deref);
    env.add_function("deref", deref);
    env.add_filter("asDict", as_dict);
    env.add_function("asDict", as_dict);
    env.add_function("hasKey", has_key);
    env.add_filter("toYaml", to_yaml);
    env.add_function("toYaml", to_yaml);
    env.add_filter("toJson", to_json);
    env.add_function("toJson", to_json);
    env.add_filter("b64enc", b64enc);
    env.add_filter("b64dec", b64dec);
}

/// Return the value an optional field refers to, failing when it is unset.
pub fn deref(value: Value) -> Result<Value, Error> {
    if value.is_undefined() || value.is_none() {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            "cannot dereference an unset value",
        ));
    }
    Ok(value)
}

/// Copy a string-keyed map into a map of arbitrary values.
///
/// Unset maps (absent labels or annotations) become an empty map.
pub fn as_dict(value: Value) -> Result<Value, Error> {
    if value.is_undefined() || value.is_none() {
        return Ok(Value::from(BTreeMap::<String, Value>::new()));
    }
    if value.kind() != ValueKind::Map {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("asDict expects a mapping, got {}", value.kind()),
        ));
    }

    let mut out = BTreeMap::new();
    for key in value.try_iter()? {
        let item = value.get_item(&key)?;
        let key = match key.as_str() {
            Some(s) => s.to_string(),
            None => key.to_string(),
        };
        out.insert(key, item);
    }
    Ok(Value::from(out))
}

/// Whether `map` contains `key`. Unset maps contain nothing.
pub fn has_key(map: Value, key: &str) -> Result<bool, Error> {
    if map.is_undefined() || map.is_none() {
        return Ok(false);
    }
    if map.kind() != ValueKind::Map {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("hasKey expects a mapping, got {}", map.kind()),
        ));
    }
    Ok(!map.get_item(&Value::from(key))?.is_undefined())
}

pub fn to_yaml(value: Value) -> Result<String, Error> {
    let yaml = serde_yaml::to_string(&value).map_err(|e| {
        Error::new(ErrorKind::InvalidOperation, "cannot serialize to YAML").with_source(e)
    })?;
    Ok(yaml.trim_end_matches('\n').to_string())
}

pub fn to_json(value: Value) -> Result<String, Error> {
    serde_json::to_string(&value).map_err(|e| {
        Error::new(ErrorKind::InvalidOperation, "cannot serialize to JSON").with_source(e)
    })
}

pub fn b64enc(value: &str) -> String {
    STANDARD.encode(value)
}

pub fn b64dec(value: &str) -> Result<String, Error> {
    let bytes = STANDARD.decode(value).map_err(|e| {
        Error::new(ErrorKind::InvalidOperation, "invalid base64 input").with_source(e)
    })?;
    String::from_utf8(bytes).map_err(|e| {
        Error::new(ErrorKind::InvalidOperation, "decoded base64 is not UTF-8").with_source(e)
    })
}
