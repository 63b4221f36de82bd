//! # Config Store
//!
//! The engine: drives a schema'd set of backing fields through default
//! application, JSON document round-trip, and whole-resource persistence.
//!
//! All document traffic is in schema order, and absent keys fall back to the
//! descriptor default on every read — a document written against an older
//! schema simply defaults newly added fields. Presence is the only thing
//! that matters: a present-but-`null` value is coerced like any other
//! present value, never defaulted.

use crate::backend::ConfigBackend;
use crate::error::ConfigError;
use crate::schema::{ParamDefault, ParamDescriptor, ParamSchema, ParamType};
use crate::storage::FieldStorage;
use crate::text;
use serde_json::{Map, Value};

/// A JSON object document keyed by parameter name.
///
/// With serde_json's `preserve_order`, insertion order survives
/// serialization, which keeps persisted field order equal to schema order.
pub type Document = Map<String, Value>;

// =============================================================================
// CONFIG STORE
// =============================================================================

/// Schema-driven value store over a concrete configuration record.
///
/// Single-owner: the store performs no locking and `load`/`save` block; the
/// caller serializes all access, including direct field reads/writes through
/// the record between document operations.
#[derive(Debug)]
pub struct ConfigStore<F: FieldStorage, B: ConfigBackend> {
    schema: ParamSchema,
    fields: F,
    backend: B,
}

impl<F: FieldStorage, B: ConfigBackend> ConfigStore<F, B> {
    /// Assemble a store. The schema and record must agree on field count and
    /// slot sizes; that agreement is the integrator's authoring contract.
    pub fn new(schema: ParamSchema, fields: F, backend: B) -> Self {
        Self {
            schema,
            fields,
            backend,
        }
    }

    /// The authored schema.
    #[must_use]
    pub fn schema(&self) -> ParamSchema {
        self.schema
    }

    /// Typed access to the concrete record.
    #[must_use]
    pub fn fields(&self) -> &F {
        &self.fields
    }

    /// Mutable typed access to the concrete record.
    pub fn fields_mut(&mut self) -> &mut F {
        &mut self.fields
    }

    /// The persistence backend.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    // -------------------------------------------------------------------------
    // DEFAULTS
    // -------------------------------------------------------------------------

    /// Reset every field to its descriptor default. No I/O; never fails.
    pub fn clear(&mut self) {
        let schema = self.schema;
        for index in 0..schema.count() {
            if let Some(desc) = schema.get(index) {
                apply_default(desc, self.fields.field_mut(index));
            }
        }
    }

    // -------------------------------------------------------------------------
    // PERSISTENCE
    // -------------------------------------------------------------------------

    /// Read the backend resource and decode it into the fields.
    ///
    /// An unreadable resource or unparseable document fails with NO field
    /// mutation. Recovery policy (typically `clear()` and continue) is the
    /// caller's.
    pub fn load(&mut self) -> Result<(), ConfigError> {
        let bytes = self.backend.read()?;
        let doc: Document = serde_json::from_slice(&bytes)
            .map_err(|e| ConfigError::MalformedDocument(e.to_string()))?;
        self.read_document(&doc);
        Ok(())
    }

    /// Encode the fields and replace the backend resource.
    pub fn save(&mut self) -> Result<(), ConfigError> {
        let doc = self.write_document();
        let bytes = serde_json::to_vec(&doc)
            .map_err(|e| ConfigError::BackendWriteFailure(e.to_string()))?;
        self.backend.write(&bytes)
    }

    // -------------------------------------------------------------------------
    // DOCUMENT CODEC
    // -------------------------------------------------------------------------

    /// Decode a document into the fields, in schema order.
    ///
    /// Present keys are coerced per type; absent keys default that single
    /// field exactly as `clear()` would. Never fails, never stops early:
    /// every field ends up either decoded or defaulted.
    pub fn read_document(&mut self, doc: &Document) {
        let schema = self.schema;
        for index in 0..schema.count() {
            if let Some(desc) = schema.get(index) {
                let slot = self.fields.field_mut(index);
                match doc.get(desc.name) {
                    Some(value) => decode_value(desc, slot, value),
                    None => apply_default(desc, slot),
                }
            }
        }
    }

    /// Encode every field into a fresh document, in schema order.
    #[must_use]
    pub fn write_document(&self) -> Document {
        let mut doc = Document::new();
        let schema = self.schema;
        for index in 0..schema.count() {
            if let Some(desc) = schema.get(index) {
                doc.insert(
                    desc.name.to_string(),
                    encode_value(desc, self.fields.field(index)),
                );
            }
        }
        doc
    }

    /// Pretty-printed plain document, for out-of-band export.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.write_document()).unwrap_or_default()
    }

    /// Decode an in-memory document text. Same contract as [`Self::load`]
    /// minus the backend: a malformed document leaves the store untouched.
    pub fn from_json(&mut self, doc: &str) -> Result<(), ConfigError> {
        let doc: Document =
            serde_json::from_str(doc).map_err(|e| ConfigError::MalformedDocument(e.to_string()))?;
        self.read_document(&doc);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // COMPLEX PROJECTION
    // -------------------------------------------------------------------------

    /// Read-only management-UI projection: per field `t` (wire type code),
    /// `v` (value), `d` (description, if any), `s` (capacity, text types
    /// only). Never persisted.
    #[must_use]
    pub fn complex_document(&self) -> Document {
        let mut doc = Document::new();
        let schema = self.schema;
        for index in 0..schema.count() {
            if let Some(desc) = schema.get(index) {
                let mut entry = Document::new();
                entry.insert(
                    "t".to_string(),
                    Value::String(desc.param_type.code().to_string()),
                );
                entry.insert("v".to_string(), encode_value(desc, self.fields.field(index)));
                if let Some(d) = desc.descr {
                    entry.insert("d".to_string(), Value::String(d.to_string()));
                }
                if desc.param_type.is_text() {
                    entry.insert("s".to_string(), Value::from(desc.size));
                }
                doc.insert(desc.name.to_string(), Value::Object(entry));
            }
        }
        doc
    }

    /// Compact serialization of [`Self::complex_document`].
    #[must_use]
    pub fn to_complex_json(&self) -> String {
        serde_json::to_string(&self.complex_document()).unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // FACADE OPERATIONS (external collaborators)
    // -------------------------------------------------------------------------

    /// Decode a document text and persist the result.
    pub fn set_from_json(&mut self, doc: &str) -> Result<(), ConfigError> {
        self.from_json(doc)?;
        self.save()
    }

    /// Reset every field to defaults and persist the result.
    pub fn reset(&mut self) -> Result<(), ConfigError> {
        self.clear();
        self.save()
    }
}

// =============================================================================
// PER-FIELD ENCODE / DECODE
// =============================================================================

/// Apply a descriptor default to its slot: text fields are zeroed then get
/// the default text truncated to `size - 1`; fixed-width fields get the
/// default's native bytes, exactly `size` of them.
fn apply_default(desc: &ParamDescriptor, slot: &mut [u8]) {
    match desc.default {
        ParamDefault::Str(default) => text::copy_str(slot, default.unwrap_or("")),
        ParamDefault::Bool(v) => slot.copy_from_slice(&[u8::from(v)]),
        ParamDefault::I8(v) => slot.copy_from_slice(&v.to_ne_bytes()),
        ParamDefault::U8(v) => slot.copy_from_slice(&v.to_ne_bytes()),
        ParamDefault::I16(v) => slot.copy_from_slice(&v.to_ne_bytes()),
        ParamDefault::U16(v) => slot.copy_from_slice(&v.to_ne_bytes()),
        ParamDefault::I32(v) => slot.copy_from_slice(&v.to_ne_bytes()),
        ParamDefault::U32(v) => slot.copy_from_slice(&v.to_ne_bytes()),
        ParamDefault::Float(v) => slot.copy_from_slice(&v.to_ne_bytes()),
        ParamDefault::Char(v) => slot.copy_from_slice(&[v]),
    }
}

/// Decode one present document value into a slot, best-effort per the
/// coercion policy in [`coerce`].
fn decode_value(desc: &ParamDescriptor, slot: &mut [u8], value: &Value) {
    match desc.param_type {
        ParamType::Bool => slot.copy_from_slice(&[u8::from(coerce::to_bool(value))]),
        ParamType::I8 => slot.copy_from_slice(&(coerce::to_i64(value) as i8).to_ne_bytes()),
        ParamType::U8 => slot.copy_from_slice(&(coerce::to_i64(value) as u8).to_ne_bytes()),
        ParamType::I16 => slot.copy_from_slice(&(coerce::to_i64(value) as i16).to_ne_bytes()),
        ParamType::U16 => slot.copy_from_slice(&(coerce::to_i64(value) as u16).to_ne_bytes()),
        ParamType::I32 => slot.copy_from_slice(&(coerce::to_i64(value) as i32).to_ne_bytes()),
        ParamType::U32 => slot.copy_from_slice(&(coerce::to_i64(value) as u32).to_ne_bytes()),
        ParamType::Float => slot.copy_from_slice(&coerce::to_f32(value).to_ne_bytes()),
        ParamType::Char => slot.copy_from_slice(&[coerce::to_char_byte(value)]),
        ParamType::Str | ParamType::Pswd => {
            text::copy_str(slot, value.as_str().unwrap_or(""));
        }
    }
}

/// Encode one slot as its native-typed document value.
fn encode_value(desc: &ParamDescriptor, slot: &[u8]) -> Value {
    match desc.param_type {
        ParamType::Bool => Value::Bool(slot[0] != 0),
        ParamType::I8 => Value::from(i8::from_ne_bytes([slot[0]])),
        ParamType::U8 => Value::from(slot[0]),
        ParamType::I16 => Value::from(i16::from_ne_bytes([slot[0], slot[1]])),
        ParamType::U16 => Value::from(u16::from_ne_bytes([slot[0], slot[1]])),
        ParamType::I32 => Value::from(i32::from_ne_bytes([slot[0], slot[1], slot[2], slot[3]])),
        ParamType::U32 => Value::from(u32::from_ne_bytes([slot[0], slot[1], slot[2], slot[3]])),
        ParamType::Float => {
            let v = f32::from_ne_bytes([slot[0], slot[1], slot[2], slot[3]]);
            // Non-finite values have no JSON representation.
            serde_json::Number::from_f64(f64::from(v)).map_or(Value::Null, Value::Number)
        }
        ParamType::Char => {
            let byte = slot[0];
            if byte == 0 {
                Value::String(String::new())
            } else {
                Value::String(char::from(byte).to_string())
            }
        }
        ParamType::Str | ParamType::Pswd => Value::String(text::read_str(slot).to_string()),
    }
}

// =============================================================================
// COERCION POLICY
// =============================================================================

/// Best-effort scalar coercion for type-mismatched present values.
///
/// Numbers cast with wrapping to the target width, bools count as 0/1, and
/// anything else coerces to zero/false/empty — the zero-value behavior of
/// the original firmware's JSON codec. Mismatches are not surfaced as
/// errors and never abort processing of the remaining fields.
mod coerce {
    use serde_json::Value;

    pub fn to_i64(value: &Value) -> i64 {
        match value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_u64().map(|v| v as i64))
                .or_else(|| n.as_f64().map(|v| v as i64))
                .unwrap_or(0),
            Value::Bool(b) => i64::from(*b),
            _ => 0,
        }
    }

    pub fn to_f32(value: &Value) -> f32 {
        match value {
            Value::Number(n) => n.as_f64().unwrap_or(0.0) as f32,
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            _ => 0.0,
        }
    }

    pub fn to_bool(value: &Value) -> bool {
        match value {
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            _ => false,
        }
    }

    pub fn to_char_byte(value: &Value) -> u8 {
        match value {
            Value::String(s) => s.as_bytes().first().copied().unwrap_or(0),
            Value::Number(_) => to_i64(value) as u8,
            _ => 0,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::coerce;
    use serde_json::{Value, json};

    #[test]
    fn numbers_coerce_with_wrapping() {
        assert_eq!(coerce::to_i64(&json!(42)), 42);
        assert_eq!(coerce::to_i64(&json!(-7)), -7);
        assert_eq!(coerce::to_i64(&json!(4_000_000_000u64)), 4_000_000_000);
        assert_eq!(coerce::to_i64(&json!(2.9)), 2);
        // 300 wraps into a u8 field at the decode site.
        assert_eq!(coerce::to_i64(&json!(300)) as u8, 44);
    }

    #[test]
    fn mismatched_values_coerce_to_zero() {
        assert_eq!(coerce::to_i64(&json!("not a number")), 0);
        assert_eq!(coerce::to_i64(&Value::Null), 0);
        assert_eq!(coerce::to_f32(&json!([1, 2])), 0.0);
        assert!(!coerce::to_bool(&json!("true")));
        assert_eq!(coerce::to_char_byte(&Value::Null), 0);
    }

    #[test]
    fn bools_and_numbers_interconvert() {
        assert_eq!(coerce::to_i64(&json!(true)), 1);
        assert!(coerce::to_bool(&json!(1)));
        assert!(coerce::to_bool(&json!(0.5)));
        assert!(!coerce::to_bool(&json!(0)));
        assert_eq!(coerce::to_f32(&json!(false)), 0.0);
    }

    #[test]
    fn char_takes_first_byte_of_string() {
        assert_eq!(coerce::to_char_byte(&json!("Celsius")), b'C');
        assert_eq!(coerce::to_char_byte(&json!("")), 0);
        assert_eq!(coerce::to_char_byte(&json!(65)), b'A');
    }
}
