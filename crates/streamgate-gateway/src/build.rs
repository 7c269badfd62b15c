//! Per-operation descriptor builders.
//!
//! Every read builder applies the same validation sequence, short-circuiting
//! on the first failure:
//!
//! 1. reject a request with no parameters at all;
//! 2. check presence of every required parameter (existence, not
//!    truthiness);
//! 3. check each required value is non-empty after trimming;
//! 4. check required lists are non-empty;
//! 5. coerce optional parameters only when present, otherwise apply the
//!    documented default;
//! 6. trim string fields before they enter the descriptor (list elements
//!    are not individually trimmed).
//!
//! `publish_item` reads a JSON body instead of query parameters and encodes
//! its payload to canonical JSON text exactly once, at build time.

use serde_json::Value;
use streamgate_types::{
    fields, StreamQueryDescriptor, DEFAULT_ITEM_COUNT, DEFAULT_ITEM_START, DEFAULT_LOCAL_ORDERING,
    DEFAULT_VERBOSE,
};

use crate::coerce::{coerce_boolean, coerce_integer};
use crate::error::{GatewayError, GatewayResult, ParamSource};
use crate::params::RawParams;

const BLOCKCHAIN_NAME_LABEL: &str = "blockchain name";
const STREAM_NAME_LABEL: &str = "stream name";
const KEY_LABEL: &str = "data key";
const PUBLISHER_LABEL: &str = "publisher wallet address";
const KEYS_LABEL: &str = "keys";
const KEYS_LIST_LABEL: &str = "list of keys";
const PUBLISHERS_LIST_LABEL: &str = "list of publishers";
const STREAM_KEYS_LIST_LABEL: &str = "list of keys that belong to the stream";
const DATA_LABEL: &str = "data";

/// `verbose`/`count`/`start`/`localOrdering` after defaulting and coercion.
///
/// `localOrdering` arrives on the wire as an integer (any non-zero value
/// selects node-arrival order), so it coerces through [`coerce_integer`],
/// not [`coerce_boolean`].
struct PageOptions {
    verbose: bool,
    count: i64,
    start: i64,
    local_ordering: bool,
}

impl PageOptions {
    fn read(params: &RawParams) -> GatewayResult<Self> {
        let mut options = Self {
            verbose: DEFAULT_VERBOSE,
            count: DEFAULT_ITEM_COUNT,
            start: DEFAULT_ITEM_START,
            local_ordering: DEFAULT_LOCAL_ORDERING,
        };
        if let Some(raw) = params.get(fields::VERBOSE) {
            options.verbose = coerce_boolean(fields::VERBOSE, raw)?;
        }
        if let Some(raw) = params.get(fields::COUNT) {
            options.count = coerce_integer(fields::COUNT, raw)?;
        }
        if let Some(raw) = params.get(fields::START) {
            options.start = coerce_integer(fields::START, raw)?;
        }
        if let Some(raw) = params.get(fields::LOCAL_ORDERING) {
            options.local_ordering = coerce_integer(fields::LOCAL_ORDERING, raw)? != 0;
        }
        Ok(options)
    }

    fn read_verbose_only(params: &RawParams) -> GatewayResult<bool> {
        match params.get(fields::VERBOSE) {
            Some(raw) => coerce_boolean(fields::VERBOSE, raw),
            None => Ok(DEFAULT_VERBOSE),
        }
    }
}

fn ensure_query_params(params: &RawParams) -> GatewayResult<()> {
    if params.is_empty() {
        return Err(GatewayError::EmptyRequest(ParamSource::Query));
    }
    Ok(())
}

/// Presence check only; emptiness is validated separately, after every
/// required parameter has been confirmed present.
fn present<'p>(params: &'p RawParams, name: &str) -> GatewayResult<&'p str> {
    params
        .get(name)
        .ok_or_else(|| GatewayError::missing_query(name))
}

fn nonempty(raw: &str, label: &str) -> GatewayResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(GatewayError::empty(label));
    }
    Ok(trimmed.to_string())
}

/// Required bracketed-array parameter: absent or empty both report the
/// parameter as missing, under its bracketed name.
fn required_list(params: &RawParams, name: &str) -> GatewayResult<Vec<String>> {
    let values = params.values(name);
    if values.is_empty() {
        return Err(GatewayError::missing_query(name));
    }
    Ok(values.to_vec())
}

/// Optional filter list: absent means "no filter"; present but empty is an
/// error, distinct from absent.
fn filter_list(
    params: &RawParams,
    name: &str,
    empty_label: &str,
) -> GatewayResult<Option<Vec<String>>> {
    if !params.contains(name) {
        return Ok(None);
    }
    let values = params.values(name);
    if values.is_empty() {
        return Err(GatewayError::empty(empty_label));
    }
    Ok(Some(values.to_vec()))
}

/// Build a [`StreamQueryDescriptor::ByKey`] from query parameters.
pub fn items_by_key(params: &RawParams) -> GatewayResult<StreamQueryDescriptor> {
    ensure_query_params(params)?;
    let blockchain_name = present(params, fields::BLOCKCHAIN_NAME)?;
    let stream_name = present(params, fields::STREAM_NAME)?;
    let key = present(params, fields::KEY)?;
    let blockchain_name = nonempty(blockchain_name, BLOCKCHAIN_NAME_LABEL)?;
    let stream_name = nonempty(stream_name, STREAM_NAME_LABEL)?;
    let key = nonempty(key, KEY_LABEL)?;
    let options = PageOptions::read(params)?;
    Ok(StreamQueryDescriptor::ByKey {
        blockchain_name,
        stream_name,
        key,
        verbose: options.verbose,
        count: options.count,
        start: options.start,
        local_ordering: options.local_ordering,
    })
}

/// Build a [`StreamQueryDescriptor::ByKeys`] from query parameters.
pub fn items_by_keys(params: &RawParams) -> GatewayResult<StreamQueryDescriptor> {
    ensure_query_params(params)?;
    let blockchain_name = present(params, fields::BLOCKCHAIN_NAME)?;
    let stream_name = present(params, fields::STREAM_NAME)?;
    let keys = required_list(params, fields::KEYS_PARAM)?;
    let blockchain_name = nonempty(blockchain_name, BLOCKCHAIN_NAME_LABEL)?;
    let stream_name = nonempty(stream_name, STREAM_NAME_LABEL)?;
    let verbose = PageOptions::read_verbose_only(params)?;
    Ok(StreamQueryDescriptor::ByKeys {
        blockchain_name,
        stream_name,
        keys,
        verbose,
    })
}

/// Build a [`StreamQueryDescriptor::ByPublisher`] from query parameters.
pub fn items_by_publisher(params: &RawParams) -> GatewayResult<StreamQueryDescriptor> {
    ensure_query_params(params)?;
    let blockchain_name = present(params, fields::BLOCKCHAIN_NAME)?;
    let stream_name = present(params, fields::STREAM_NAME)?;
    let publisher = present(params, fields::PUBLISHER)?;
    let blockchain_name = nonempty(blockchain_name, BLOCKCHAIN_NAME_LABEL)?;
    let stream_name = nonempty(stream_name, STREAM_NAME_LABEL)?;
    let publisher = nonempty(publisher, PUBLISHER_LABEL)?;
    let options = PageOptions::read(params)?;
    Ok(StreamQueryDescriptor::ByPublisher {
        blockchain_name,
        stream_name,
        publisher,
        verbose: options.verbose,
        count: options.count,
        start: options.start,
        local_ordering: options.local_ordering,
    })
}

/// Build a [`StreamQueryDescriptor::ByPublishers`] from query parameters.
pub fn items_by_publishers(params: &RawParams) -> GatewayResult<StreamQueryDescriptor> {
    ensure_query_params(params)?;
    let blockchain_name = present(params, fields::BLOCKCHAIN_NAME)?;
    let stream_name = present(params, fields::STREAM_NAME)?;
    let publishers = required_list(params, fields::PUBLISHERS_PARAM)?;
    let blockchain_name = nonempty(blockchain_name, BLOCKCHAIN_NAME_LABEL)?;
    let stream_name = nonempty(stream_name, STREAM_NAME_LABEL)?;
    let verbose = PageOptions::read_verbose_only(params)?;
    Ok(StreamQueryDescriptor::ByPublishers {
        blockchain_name,
        stream_name,
        publishers,
        verbose,
    })
}

/// Build a [`StreamQueryDescriptor::StreamItems`] from query parameters.
pub fn stream_items(params: &RawParams) -> GatewayResult<StreamQueryDescriptor> {
    ensure_query_params(params)?;
    let blockchain_name = present(params, fields::BLOCKCHAIN_NAME)?;
    let stream_name = present(params, fields::STREAM_NAME)?;
    let blockchain_name = nonempty(blockchain_name, BLOCKCHAIN_NAME_LABEL)?;
    let stream_name = nonempty(stream_name, STREAM_NAME_LABEL)?;
    let options = PageOptions::read(params)?;
    Ok(StreamQueryDescriptor::StreamItems {
        blockchain_name,
        stream_name,
        verbose: options.verbose,
        count: options.count,
        start: options.start,
        local_ordering: options.local_ordering,
    })
}

/// Build a [`StreamQueryDescriptor::StreamPublishers`] from query parameters.
pub fn stream_publishers(params: &RawParams) -> GatewayResult<StreamQueryDescriptor> {
    ensure_query_params(params)?;
    let blockchain_name = present(params, fields::BLOCKCHAIN_NAME)?;
    let stream_name = present(params, fields::STREAM_NAME)?;
    let blockchain_name = nonempty(blockchain_name, BLOCKCHAIN_NAME_LABEL)?;
    let stream_name = nonempty(stream_name, STREAM_NAME_LABEL)?;
    let publishers = filter_list(params, fields::PUBLISHERS_PARAM, PUBLISHERS_LIST_LABEL)?;
    let options = PageOptions::read(params)?;
    Ok(StreamQueryDescriptor::StreamPublishers {
        blockchain_name,
        stream_name,
        publishers,
        verbose: options.verbose,
        count: options.count,
        start: options.start,
        local_ordering: options.local_ordering,
    })
}

/// Build a [`StreamQueryDescriptor::StreamKeys`] from query parameters.
pub fn stream_keys(params: &RawParams) -> GatewayResult<StreamQueryDescriptor> {
    ensure_query_params(params)?;
    let blockchain_name = present(params, fields::BLOCKCHAIN_NAME)?;
    let stream_name = present(params, fields::STREAM_NAME)?;
    let blockchain_name = nonempty(blockchain_name, BLOCKCHAIN_NAME_LABEL)?;
    let stream_name = nonempty(stream_name, STREAM_NAME_LABEL)?;
    let keys = filter_list(params, fields::KEYS_PARAM, STREAM_KEYS_LIST_LABEL)?;
    let options = PageOptions::read(params)?;
    Ok(StreamQueryDescriptor::StreamKeys {
        blockchain_name,
        stream_name,
        keys,
        verbose: options.verbose,
        count: options.count,
        start: options.start,
        local_ordering: options.local_ordering,
    })
}

/// `true` for the JSON values the contract treats as "empty": null, false,
/// zero, and the empty string/array/object.
fn json_is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn body_string(body: &serde_json::Map<String, Value>, name: &str) -> GatewayResult<String> {
    match &body[name] {
        Value::String(s) => Ok(s.clone()),
        other => Err(GatewayError::Unclassified(format!(
            "The {name} field is not a string: {other}"
        ))),
    }
}

/// Build a [`StreamQueryDescriptor::PublishItem`] from a JSON request body.
///
/// The payload is serialized to canonical JSON text here, once; the
/// descriptor carries the encoded form so the wire representation is fixed
/// before dispatch.
pub fn publish_item(body: Option<&Value>) -> GatewayResult<StreamQueryDescriptor> {
    let body = match body {
        Some(Value::Object(map)) if !map.is_empty() => map,
        _ => return Err(GatewayError::EmptyRequest(ParamSource::Body)),
    };

    for name in [
        fields::BLOCKCHAIN_NAME,
        fields::STREAM_NAME,
        fields::KEYS,
        fields::DATA,
    ] {
        if !body.contains_key(name) {
            return Err(GatewayError::missing_body(name));
        }
    }

    let blockchain_name = nonempty(&body_string(body, fields::BLOCKCHAIN_NAME)?, BLOCKCHAIN_NAME_LABEL)?;
    let stream_name = nonempty(&body_string(body, fields::STREAM_NAME)?, STREAM_NAME_LABEL)?;

    let keys_value = &body[fields::KEYS];
    if json_is_empty(keys_value) {
        return Err(GatewayError::empty(KEYS_LIST_LABEL));
    }
    let keys = match keys_value {
        Value::Array(elements) => elements
            .iter()
            .map(|element| match element {
                Value::String(s) => Ok(s.clone()),
                other => Err(GatewayError::Unclassified(format!(
                    "The keys field must contain only strings, found {other}"
                ))),
            })
            .collect::<GatewayResult<Vec<String>>>()?,
        _ => return Err(GatewayError::NotAList(KEYS_LABEL.into())),
    };

    let data = &body[fields::DATA];
    if json_is_empty(data) {
        return Err(GatewayError::empty(DATA_LABEL));
    }
    let payload = serde_json::to_string(data)
        .map_err(|e| GatewayError::Unclassified(e.to_string()))?;

    Ok(StreamQueryDescriptor::PublishItem {
        blockchain_name,
        stream_name,
        keys,
        payload,
    })
}
