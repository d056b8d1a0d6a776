//! Rule-based mock recommendation generator.
//!
//! Deterministic fallback used when mock mode is active or no API
//! credential is configured. An ordered decision list is evaluated
//! against the profile; every matching rule appends its supplements in
//! declaration order. Rules are independent and results are NOT
//! deduplicated: a profile matching both the fatigue and smoking rules
//! gets all six supplements. This function is total and never fails.

use crate::profile::entities::HealthProfile;
use crate::recommendation::entities::{Recommendation, Supplement};

/// One entry in the decision list.
struct Rule {
    matches: fn(&HealthProfile) -> bool,
    supplements: fn() -> Vec<Supplement>,
}

/// Decision list, evaluated top to bottom.
const RULES: &[Rule] = &[
    Rule {
        matches: matches_fatigue,
        supplements: fatigue_supplements,
    },
    Rule {
        matches: matches_digestion,
        supplements: digestion_supplements,
    },
    Rule {
        matches: matches_stress,
        supplements: stress_supplements,
    },
    Rule {
        matches: matches_smoking,
        supplements: smoking_supplements,
    },
];

/// Build a deterministic, rule-based recommendation from the profile.
pub fn mock_recommendation(profile: &HealthProfile) -> Recommendation {
    let mut supplements = Vec::new();

    for rule in RULES {
        if (rule.matches)(profile) {
            supplements.extend((rule.supplements)());
        }
    }

    // Generic fallback when nothing matched
    if supplements.is_empty() {
        supplements.push(Supplement::new(
            "종합 비타민",
            "1정 (제조사 권장량)",
            "기본적인 영양소 보충을 위해 추천합니다.",
        ));
    }

    let summary = build_summary(profile, supplements.len());

    Recommendation {
        summary,
        supplements,
    }
}

fn build_summary(profile: &HealthProfile, supplement_count: usize) -> String {
    if supplement_count <= 1 {
        return format!(
            "나이 {}세, {}을 고려한 맞춤형 영양제 추천입니다.",
            profile.age,
            profile.gender.korean_label()
        );
    }

    let concerns_text = if profile.concerns.is_empty() {
        "일반적인 건강 관리".to_string()
    } else {
        profile.concerns.join(", ")
    };
    let lifestyle_text = if profile.lifestyle.is_empty() {
        "일반적인 생활 패턴".to_string()
    } else {
        profile.lifestyle.join(", ")
    };

    let mut summary = format!(
        "{}와 {}을 고려하여 수면 개선과 에너지 대사를 지원하는 보충제를 제안합니다.",
        concerns_text, lifestyle_text
    );
    if profile.smoking {
        summary.push_str(" 흡연 여부를 고려하여 항산화제를 포함했습니다.");
    }
    if profile.has_medications() {
        summary.push_str(&format!(
            " 현재 {}을 복용 중이므로 총 섭취량 관리가 필요하며, 시작 전 의료 전문가와 상담하는 것을 권합니다.",
            profile.medications
        ));
    }
    summary
}

// ==================== Rule Predicates ====================

fn matches_fatigue(profile: &HealthProfile) -> bool {
    profile.has_concern("피로")
        || profile.has_concern("피로감")
        || profile.has_lifestyle("수면")
        || profile.has_lifestyle("피로")
}

fn matches_digestion(profile: &HealthProfile) -> bool {
    profile.has_concern("소화") || profile.has_concern("소화불량")
}

fn matches_stress(profile: &HealthProfile) -> bool {
    profile.has_lifestyle("스트레스_높음") || profile.has_lifestyle("스트레스")
}

fn matches_smoking(profile: &HealthProfile) -> bool {
    profile.smoking
}

// ==================== Rule Supplements ====================

fn fatigue_supplements() -> Vec<Supplement> {
    vec![
        Supplement::new(
            "멜라토닌",
            "0.5-3 mg",
            "수면-각성 주기를 조절하고 수면의 질을 개선하는 데 도움; 피로감의 주요 원인인 만성 수면 부족에 대응하기 위해 취침 30~60분 전에 0.5–3 mg 복용이 일반적입니다.",
        )
        .with_caution(
            "일부 약물과 상호작용 가능성(예: 혈압약, 항응고제) 및 특정 질환이 있는 경우 의사와 상담; 운전이나 기계 조작 시 주의; 임신·수유 중인 경우 주의.",
        ),
        Supplement::new(
            "비타민 D3",
            "1000-2000 IU",
            "햇빛 노출이 부족한 생활에서 피로감과 근육/정서적 기분 저하를 완화하는 데 도움이 될 수 있으며, 일반적으로 1000–2000 IU를 매일 시작합니다.",
        )
        .with_caution(
            "장기간 고용량 복용 시 혈청 칼슘 수치를 확인하는 것이 좋고, 고칼슘혈증 증상에 주의; 특정 약물과의 상호작용 가능.",
        ),
        Supplement::new(
            "비타민 B12",
            "1000-2500 mcg",
            "에너지 대사 지원 및 피로 감소에 도움; 특히 흡수가 잘 되지 않는 경우나 비건/저단백 식이일 때 보충이 유용할 수 있습니다.",
        )
        .with_caution(
            "일부 약물과의 상호작용 가능성(예: 메트포르민, 위산억제제) 및 드물게 알레르기 반응 가능.",
        ),
        Supplement::new(
            "오메가-3 (EPA+DHA)",
            "1000-2000 mg",
            "뇌 건강 및 기분 개선에 도움을 줄 수 있으며 전반적인 피로 완화에도 기여할 수 있습니다; 식사와 함께 섭취하는 것이 흡수를 돕습니다.",
        )
        .with_caution("혈액 응고제 복용 시 주의; 어패류 알레르기가 있는 경우 피해야 함."),
    ]
}

fn digestion_supplements() -> Vec<Supplement> {
    vec![Supplement::new(
        "프로바이오틱스",
        "100억-500억 CFU",
        "소화 기능 개선과 장 건강에 도움됩니다.",
    )]
}

fn stress_supplements() -> Vec<Supplement> {
    vec![
        Supplement::new(
            "L-테아닌",
            "100-200 mg",
            "스트레스 감소와 수면 질 개선에 도움됩니다.",
        )
        .with_caution("카페인과 함께 섭취 시 주의하세요."),
    ]
}

fn smoking_supplements() -> Vec<Supplement> {
    vec![
        Supplement::new(
            "비타민 C",
            "500-1000 mg",
            "흡연 시 산화 스트레스가 증가하므로 항산화제인 비타민 C 보충이 도움이 될 수 있습니다. 흡연자는 비흡연자보다 비타민 C 필요량이 높습니다.",
        )
        .with_caution("고용량 복용 시 설사나 위장 장애가 발생할 수 있으므로 적절한 용량을 유지하세요."),
        Supplement::new(
            "N-아세틸시스테인 (NAC)",
            "600-1200 mg",
            "흡연으로 인한 폐 손상과 점액 분비 개선에 도움을 줄 수 있으며, 항산화 효과가 있습니다.",
        )
        .with_caution("일부 약물과 상호작용 가능성이 있으므로 의사와 상담 후 복용하세요."),
    ]
}
