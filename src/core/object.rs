use crate::domain::model::Record;
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Independent copy via a full JSON round trip.
///
/// Anything serde_json cannot represent (e.g. maps with non-string keys)
/// fails with `SerializationError`. Non-finite floats come back as `null`.
pub fn deep_clone<T>(value: &T) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let serialized = serde_json::to_string(value)?;
    tracing::trace!("deep_clone serialized {} bytes", serialized.len());
    Ok(serde_json::from_str(&serialized)?)
}

/// Keys in `b` win.
pub fn merge(a: &Record, b: &Record) -> Record {
    let mut result = a.clone();
    for (key, value) in b {
        result.insert(key.clone(), value.clone());
    }
    result
}

pub fn pick<K: AsRef<str>>(obj: &Record, keys: &[K]) -> Record {
    keys.iter()
        .filter_map(|key| {
            let key = key.as_ref();
            obj.get(key).map(|value| (key.to_string(), value.clone()))
        })
        .collect()
}

pub fn omit<K: AsRef<str>>(obj: &Record, keys: &[K]) -> Record {
    let mut result = obj.clone();
    for key in keys {
        result.remove(key.as_ref());
    }
    result
}
