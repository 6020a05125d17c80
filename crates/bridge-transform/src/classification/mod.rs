//! Keyword classification of bridge records.
//!
//! Source systems fill material and structure descriptors inconsistently, so
//! the construction type and prestressing method are read from several
//! candidate fields in a fixed priority order: material description, then
//! superstructure type, then superstructure form. The first candidate that
//! matches any rule decides, and within a candidate the rule order decides.

pub mod rules;

use std::sync::LazyLock;

use bridge_model::{BridgeType, PostCategory, TensionMethod};

pub use rules::{KeywordRule, RuleSet};

/// PC, then RC, then steel. `PRC` is caught by the PC rule first.
pub static BRIDGE_TYPE_RULES: LazyLock<RuleSet<BridgeType>> = LazyLock::new(|| {
    RuleSet::new(vec![
        KeywordRule::new(
            BridgeType::Pc,
            &[
                "PC",
                "PRC",
                "プレストレスト",
                "PRESTRESSED",
                "ポストテンション",
                "POST-TENSION",
            ],
        ),
        KeywordRule::new(BridgeType::Rc, &["RC", "鉄筋", "REINFORCED"]),
        KeywordRule::new(
            BridgeType::Steel,
            &["鋼", "S造", "STEEL", "スチール", "トラス", "TRUSS", "鋼桁"],
        ),
    ])
});

/// Post-tension is tested before pre-tension.
pub static TENSION_RULES: LazyLock<RuleSet<TensionMethod>> = LazyLock::new(|| {
    RuleSet::new(vec![
        KeywordRule::new(
            TensionMethod::Posttension,
            &[
                "ポストテンション",
                "ポステン",
                "POST-TENSION",
                "POSTTENSION",
                "POST TENSION",
            ],
        ),
        KeywordRule::new(
            TensionMethod::Pretension,
            &[
                "プレテンション",
                "プレテン",
                "PRE-TENSION",
                "PRETENSION",
                "PRE TENSION",
            ],
        ),
    ])
});

/// Hollow slab, then T-girder, then box girder.
pub static POST_CATEGORY_RULES: LazyLock<RuleSet<PostCategory>> = LazyLock::new(|| {
    RuleSet::new(vec![
        KeywordRule::new(PostCategory::HollowSlab, &["中空床版", "中空スラブ", "HOLLOW"]),
        KeywordRule::new(
            PostCategory::TGirder,
            &["T桁", "Tげた", "T型", "T-GIRDER", "T GIRDER"],
        ),
        KeywordRule::new(
            PostCategory::BoxGirder,
            &["箱桁", "箱げた", "箱型", "BOX GIRDER", "BOX-GIRDER"],
        ),
    ])
});

pub static CULVERT_RULES: LazyLock<RuleSet<bool>> = LazyLock::new(|| {
    RuleSet::new(vec![KeywordRule::new(
        true,
        &["カルバート", "ボックスカルバート", "函渠", "CULVERT"],
    )])
});

/// Descriptor fields a record is classified from.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassificationInput<'a> {
    pub material: &'a str,
    pub superstructure_type: &'a str,
    pub superstructure_form: &'a str,
}

impl<'a> ClassificationInput<'a> {
    fn candidates(&self) -> [&'a str; 3] {
        [
            self.material,
            self.superstructure_type,
            self.superstructure_form,
        ]
    }

    /// Superstructure type and form joined by a space, empty when both are.
    pub fn structure_detail(&self) -> String {
        [self.superstructure_type, self.superstructure_form]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Every derived classification output of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub bridge_type: BridgeType,
    pub pc_tension_type: Option<TensionMethod>,
    pub pc_post_category: Option<PostCategory>,
    pub is_culvert: bool,
}

/// Construction type; `Other` when no rule matches any candidate.
pub fn classify_bridge_type(input: &ClassificationInput<'_>) -> BridgeType {
    BRIDGE_TYPE_RULES
        .classify(input.candidates())
        .unwrap_or(BridgeType::Other)
}

/// Prestressing method, computed for every record regardless of type.
pub fn classify_tension(input: &ClassificationInput<'_>) -> Option<TensionMethod> {
    TENSION_RULES.classify(input.candidates())
}

/// Post-tension sub-form.
///
/// Only post-tensioned records get one. Non-empty detail text that matches
/// no sub-form is `Other`; empty detail text yields `None`.
pub fn classify_post_category(
    tension: Option<TensionMethod>,
    detail: &str,
) -> Option<PostCategory> {
    if tension != Some(TensionMethod::Posttension) || detail.trim().is_empty() {
        return None;
    }
    Some(
        POST_CATEGORY_RULES
            .first_match(detail)
            .unwrap_or(PostCategory::Other),
    )
}

/// Culvert keywords anywhere in the combined superstructure text.
pub fn detect_culvert(input: &ClassificationInput<'_>) -> bool {
    CULVERT_RULES.any_match(&input.structure_detail())
}

pub fn classify(input: &ClassificationInput<'_>) -> Classification {
    let pc_tension_type = classify_tension(input);
    Classification {
        bridge_type: classify_bridge_type(input),
        pc_tension_type,
        pc_post_category: classify_post_category(pc_tension_type, &input.structure_detail()),
        is_culvert: detect_culvert(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material(text: &str) -> ClassificationInput<'_> {
        ClassificationInput {
            material: text,
            ..ClassificationInput::default()
        }
    }

    #[test]
    fn rule_order_breaks_ties_within_a_field() {
        assert_eq!(classify_bridge_type(&material("RC・鋼 合成")), BridgeType::Rc);
        assert_eq!(classify_bridge_type(&material("PRC")), BridgeType::Pc);
        assert_eq!(classify_bridge_type(&material("ＳＴＥＥＬ")), BridgeType::Steel);
        assert_eq!(classify_bridge_type(&material("石造")), BridgeType::Other);
        assert_eq!(classify_bridge_type(&material("")), BridgeType::Other);
    }

    #[test]
    fn later_candidates_fill_in_for_unmatched_material() {
        let input = ClassificationInput {
            material: "コンクリート",
            superstructure_type: "鋼単純鈑桁",
            superstructure_form: "PC床版",
        };
        assert_eq!(classify_bridge_type(&input), BridgeType::Steel);
    }

    #[test]
    fn posttension_beats_pretension() {
        let input = material("プレテンション・ポストテンション併用");
        assert_eq!(classify_tension(&input), Some(TensionMethod::Posttension));
        assert_eq!(
            classify_tension(&material("ﾌﾟﾚﾃﾝｼｮﾝ")),
            Some(TensionMethod::Pretension)
        );
        assert_eq!(classify_tension(&material("PC")), None);
    }

    #[test]
    fn post_category_distinguishes_other_from_absent() {
        let post = Some(TensionMethod::Posttension);
        assert_eq!(
            classify_post_category(post, "PC中空床版 T桁"),
            Some(PostCategory::HollowSlab)
        );
        assert_eq!(
            classify_post_category(post, "ＰＣ箱桁"),
            Some(PostCategory::BoxGirder)
        );
        assert_eq!(
            classify_post_category(post, "連続桁"),
            Some(PostCategory::Other)
        );
        assert_eq!(classify_post_category(post, " "), None);
        assert_eq!(
            classify_post_category(Some(TensionMethod::Pretension), "T桁"),
            None
        );
        assert_eq!(classify_post_category(None, "T桁"), None);
    }

    #[test]
    fn culvert_reads_type_and_form_only() {
        let input = ClassificationInput {
            material: "カルバート",
            superstructure_type: "",
            superstructure_form: "",
        };
        assert!(!detect_culvert(&input));
        let input = ClassificationInput {
            material: "RC",
            superstructure_type: "",
            superstructure_form: "ﾎﾞｯｸｽｶﾙﾊﾞｰﾄ",
        };
        assert!(detect_culvert(&input));
    }

    #[test]
    fn classify_combines_every_output() {
        let input = ClassificationInput {
            material: "PC",
            superstructure_type: "ポストテンション方式",
            superstructure_form: "T桁",
        };
        assert_eq!(
            classify(&input),
            Classification {
                bridge_type: BridgeType::Pc,
                pc_tension_type: Some(TensionMethod::Posttension),
                pc_post_category: Some(PostCategory::TGirder),
                is_culvert: false,
            }
        );
    }
}
