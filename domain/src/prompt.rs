//! Prompt construction for the chat-completion request.
//!
//! Pure and deterministic: identical profiles always produce a
//! byte-identical prompt, which keeps the live pipeline testable. The
//! prompt is kept compact so reasoning models spend fewer hidden tokens
//! re-reading it.

use crate::profile::entities::HealthProfile;

/// Build the instruction prompt for a health profile.
///
/// Embeds age, Korean gender label, weight, smoking status, medications
/// (or "없음"), comma-joined concerns and lifestyle (or "없음"), and a
/// fixed block demanding JSON-only output with at least one supplement.
pub fn build_prompt(profile: &HealthProfile) -> String {
    let medications = if profile.has_medications() {
        profile.medications.as_str()
    } else {
        "없음"
    };
    let concerns = join_or_none(&profile.concerns);
    let lifestyle = join_or_none(&profile.lifestyle);

    format!(
        r#"건강 정보 기반 영양제 추천.

사용자: {age}세 {gender}, {weight}kg, {smoking}
약물: {medications}
고민: {concerns}
생활: {lifestyle}

JSON 형식으로만 출력:
{{
  "supplements": [{{"name": "한국어명", "reason": "이유", "dosage": "1일 기준 섭취 용량 (예: 400 IU, 300 mg)", "caution": "주의사항(선택)"}}],
  "summary": "요약"
}}

규칙:
1. JSON만 출력 (설명 없음)
2. supplements 최소 1개
3. name은 한국어 (예: "멜라토닌", "비타민 D3")
4. dosage는 1일 기준 섭취 용량을 명시 (예: "400 IU", "300 mg", "1000-2000 IU")"#,
        age = profile.age,
        gender = profile.gender.korean_label(),
        weight = profile.weight_kg,
        smoking = if profile.smoking { "흡연" } else { "비흡연" },
        medications = medications,
        concerns = concerns,
        lifestyle = lifestyle,
    )
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "없음".to_string()
    } else {
        values.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::entities::Gender;

    fn sample_profile() -> HealthProfile {
        HealthProfile::new(35, Gender::Female, 58.5, true)
            .with_medications("혈압약")
            .with_concerns(vec!["피로".to_string(), "두통".to_string()])
            .with_lifestyle(vec!["야근_자주".to_string()])
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let profile = sample_profile();
        assert_eq!(build_prompt(&profile), build_prompt(&profile));
    }

    #[test]
    fn test_prompt_embeds_profile_fields() {
        let prompt = build_prompt(&sample_profile());
        assert!(prompt.contains("35세 여성, 58.5kg, 흡연"));
        assert!(prompt.contains("약물: 혈압약"));
        assert!(prompt.contains("고민: 피로, 두통"));
        assert!(prompt.contains("생활: 야근_자주"));
    }

    #[test]
    fn test_prompt_empty_fields_fall_back_to_none() {
        let profile = HealthProfile::new(20, Gender::Male, 70.0, false);
        let prompt = build_prompt(&profile);
        assert!(prompt.contains("비흡연"));
        assert!(prompt.contains("약물: 없음"));
        assert!(prompt.contains("고민: 없음"));
        assert!(prompt.contains("생활: 없음"));
    }

    #[test]
    fn test_prompt_demands_json_only_output() {
        let prompt = build_prompt(&sample_profile());
        assert!(prompt.contains("JSON 형식으로만 출력"));
        assert!(prompt.contains("supplements 최소 1개"));
    }
}
