//! Console output formatting for recommendations and errors

use advisor_domain::{LlmError, Recommendation, Supplement};
use colored::Colorize;

/// Formats recommendations for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete recommendation: summary plus one card per supplement.
    pub fn format(recommendation: &Recommendation) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("맞춤형 영양제 추천"));
        output.push('\n');

        output.push_str(&format!(
            "{}\n{}\n",
            "종합 의견:".cyan().bold(),
            recommendation.summary
        ));

        if recommendation.supplements.is_empty() {
            output.push_str(&format!("\n{}\n", "추천된 영양제가 없습니다.".dimmed()));
        } else {
            output.push_str(&Self::section_header(&format!(
                "추천 영양제 ({}종)",
                recommendation.supplements.len()
            )));
            for supplement in &recommendation.supplements {
                output.push_str(&Self::card(supplement));
            }
        }

        output.push_str(&format!(
            "\n{}\n",
            "※ 이 추천은 참고용이며, 전문의와 상담 후 복용하세요.".dimmed()
        ));
        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(recommendation: &Recommendation) -> String {
        serde_json::to_string_pretty(recommendation).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format summary only (concise output)
    pub fn format_summary_only(recommendation: &Recommendation) -> String {
        let names: Vec<&str> = recommendation
            .supplements
            .iter()
            .map(|s| s.name.as_str())
            .collect();

        let mut output = String::new();
        output.push_str(&format!(
            "{}\n\n",
            "=== 맞춤형 영양제 추천 ===".cyan().bold()
        ));
        output.push_str(&recommendation.summary);
        output.push('\n');
        if !names.is_empty() {
            output.push_str(&format!(
                "\n{} {}\n",
                "추천:".bold(),
                names.join(", ")
            ));
        }
        output
    }

    /// Format an error with user-facing guidance.
    pub fn format_error(error: &LlmError) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", "오류가 발생했습니다".red().bold()));
        output.push_str(&format!("{}\n", error));

        if let Some(hint) = Self::hint(error) {
            output.push_str(&format!("\n{}\n", hint.blue()));
        }

        output
    }

    /// Guidance line per error kind. Quota errors point at mock mode so
    /// testing can continue without API spend.
    fn hint(error: &LlmError) -> Option<&'static str> {
        match error {
            LlmError::Timeout(_) => Some("잠시 후 다시 시도해주세요."),
            LlmError::Api(message)
                if message.contains("한도")
                    || message.contains("할당량")
                    || message.contains("quota") =>
            {
                Some("💡 개발 중에는 Mock 모드(--mock)를 사용하면 API 비용 없이 테스트할 수 있습니다.")
            }
            LlmError::Api(_) => None,
            LlmError::Network(_) => Some("네트워크 연결 상태를 확인한 뒤 다시 시도해주세요."),
            LlmError::Parse(_) => Some("다시 시도하면 해결되는 경우가 많습니다."),
            LlmError::Cancelled => None,
        }
    }

    fn card(supplement: &Supplement) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}\n",
            format!("── {} ──", supplement.name).yellow().bold()
        ));
        output.push_str(&format!(
            "  {} {}\n",
            "추천 이유:".cyan(),
            supplement.reason
        ));
        output.push_str(&format!(
            "  {} {}\n",
            "복용법:  ".cyan(),
            supplement.dosage
        ));
        if let Some(caution) = &supplement.caution {
            output.push_str(&format!("  {} {}\n", "⚠ 주의:  ".yellow(), caution));
        }

        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recommendation() -> Recommendation {
        Recommendation {
            summary: "수면의 질 개선이 필요해 보입니다.".to_string(),
            supplements: vec![
                Supplement::new("멜라토닌", "취침 30분 전 0.5~3mg", "수면의 질 개선")
                    .with_caution("장기 복용 전 의사와 상담하세요."),
                Supplement::new("오메가-3", "식사와 함께 1000mg", "피로 개선과 항염 효과"),
            ],
        }
    }

    #[test]
    fn test_format_contains_summary_and_all_cards() {
        let output = ConsoleFormatter::format(&sample_recommendation());
        assert!(output.contains("수면의 질 개선이 필요해 보입니다."));
        assert!(output.contains("멜라토닌"));
        assert!(output.contains("오메가-3"));
        assert!(output.contains("장기 복용 전 의사와 상담하세요."));
    }

    #[test]
    fn test_format_without_caution_omits_caution_line() {
        let recommendation = Recommendation {
            summary: "요약".to_string(),
            supplements: vec![Supplement::new("비타민 C", "하루 500mg", "면역 보조")],
        };
        let output = ConsoleFormatter::format(&recommendation);
        assert!(!output.contains("주의"));
    }

    #[test]
    fn test_format_empty_supplements() {
        let recommendation = Recommendation {
            summary: "특별한 보충이 필요하지 않습니다.".to_string(),
            supplements: vec![],
        };
        let output = ConsoleFormatter::format(&recommendation);
        assert!(output.contains("추천된 영양제가 없습니다."));
    }

    #[test]
    fn test_format_json_round_trips() {
        let recommendation = sample_recommendation();
        let json = ConsoleFormatter::format_json(&recommendation);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["supplements"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["summary"], "수면의 질 개선이 필요해 보입니다.");
    }

    #[test]
    fn test_format_error_quota_includes_mock_hint() {
        let error = LlmError::Api(
            "API 사용량 한도를 초과했습니다. 잠시 후 다시 시도하거나 Mock 모드를 사용해주세요."
                .to_string(),
        );
        let output = ConsoleFormatter::format_error(&error);
        assert!(output.contains("오류가 발생했습니다"));
        assert!(output.contains("--mock"));
    }

    #[test]
    fn test_format_error_network_gets_connectivity_hint() {
        let error = LlmError::Network("네트워크 연결을 확인해주세요.".to_string());
        let output = ConsoleFormatter::format_error(&error);
        assert!(output.contains("네트워크 연결을 확인해주세요."));
        assert!(output.contains("네트워크 연결 상태를 확인한 뒤"));
        assert!(!output.contains("--mock"));
    }

    #[test]
    fn test_format_error_timeout_gets_retry_hint() {
        let error = LlmError::Timeout("API 호출 시간이 초과되었습니다.".to_string());
        let output = ConsoleFormatter::format_error(&error);
        assert!(output.contains("잠시 후 다시 시도해주세요."));
    }
}
