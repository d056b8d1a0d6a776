//! Response parsing and validation for raw model output.
//!
//! Pure domain logic: no I/O, just strict shape checking. Every field is
//! verified present and of the expected type before it is moved into the
//! output structure; nothing partially-typed ever escapes. All failures
//! are [`LlmError::Parse`].

use crate::core::error::LlmError;
use crate::recommendation::entities::{Recommendation, Supplement};
use serde_json::Value;

/// Parse raw model output into a validated [`Recommendation`].
///
/// Models occasionally wrap the JSON in markdown fences or prose despite
/// the JSON-only instruction, so the outermost `{...}` span is extracted
/// before parsing. Everything inside the span is validated strictly:
///
/// - valid JSON object at the root
/// - `supplements` present and an array
/// - each supplement has non-empty string `name` / `reason` / `dosage`
/// - `caution`, when present and non-null, is a string
/// - `summary` present and a string
pub fn parse_response(raw: &str) -> Result<Recommendation, LlmError> {
    let json_str = extract_json_span(raw)
        .ok_or_else(|| parse_error("응답에서 JSON 객체를 찾을 수 없습니다"))?;

    let root: Value = serde_json::from_str(json_str)
        .map_err(|e| parse_error(&format!("JSON 구문 오류: {}", e)))?;

    let obj = root
        .as_object()
        .ok_or_else(|| parse_error("응답의 최상위가 JSON 객체가 아닙니다"))?;

    let supplements_value = obj
        .get("supplements")
        .ok_or_else(|| parse_error("supplements 필드가 없습니다"))?;
    let entries = supplements_value
        .as_array()
        .ok_or_else(|| parse_error("supplements 필드가 배열이 아닙니다"))?;

    let mut supplements = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        supplements.push(parse_supplement(entry, index)?);
    }

    let summary = obj
        .get("summary")
        .ok_or_else(|| parse_error("summary 필드가 없습니다"))?
        .as_str()
        .ok_or_else(|| parse_error("summary 필드가 문자열이 아닙니다"))?
        .to_string();

    Ok(Recommendation {
        summary,
        supplements,
    })
}

fn parse_supplement(entry: &Value, index: usize) -> Result<Supplement, LlmError> {
    let obj = entry
        .as_object()
        .ok_or_else(|| parse_error(&format!("supplements[{}]가 객체가 아닙니다", index)))?;

    let required = |field: &str| -> Result<String, LlmError> {
        let value = obj.get(field).ok_or_else(|| {
            parse_error(&format!("supplements[{}]에 {} 필드가 없습니다", index, field))
        })?;
        let text = value.as_str().ok_or_else(|| {
            parse_error(&format!(
                "supplements[{}]의 {} 필드가 문자열이 아닙니다",
                index, field
            ))
        })?;
        if text.is_empty() {
            return Err(parse_error(&format!(
                "supplements[{}]의 {} 필드가 비어 있습니다",
                index, field
            )));
        }
        Ok(text.to_string())
    };

    let name = required("name")?;
    let reason = required("reason")?;
    let dosage = required("dosage")?;

    let caution = match obj.get("caution") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            return Err(parse_error(&format!(
                "supplements[{}]의 caution 필드가 문자열이 아닙니다",
                index
            )));
        }
    };

    Ok(Supplement {
        name,
        reason,
        dosage,
        caution,
    })
}

/// Extract the outermost `{...}` span, tolerating code fences and prose
/// around the JSON payload.
fn extract_json_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

fn parse_error(message: &str) -> LlmError {
    LlmError::Parse(format!("응답 파싱 실패: {}", message))
}
