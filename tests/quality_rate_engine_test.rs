// ==========================================
// QualityRateEngine 集成测试
// ==========================================
// 职责: 验证四种检验口径的分派、计数、舍入与判定
// ==========================================

mod helpers;

use helpers::mock_config::MockConfig;
use helpers::test_data_builder::{individual_records, sample_records, RecordBuilder};
use inspection_quality_rate::domain::{
    BatchTotals, CalculationResult, FullInspectionStrategy, InspectionObjectType, InspectionType,
    JudgmentResult, QualityPlanConfig,
};
use inspection_quality_rate::engine::{
    calculate_batch_qualified_rate, calculate_sample_qualified_rate, QualityRateEngine,
    QualityRule,
};
use inspection_quality_rate::logging;

// ==========================================
// 典型场景
// ==========================================

#[test]
fn test_scenario_single_item() {
    logging::init_test();
    let records = individual_records(3, 1, None);

    let result = QualityRateEngine::new().calculate_by_plan(&records, &QualityPlanConfig::single_item());

    assert_eq!(
        result,
        CalculationResult {
            total_quantity: 4,
            qualified_quantity: 3,
            qualified_rate: 75.0,
            judgment_result: JudgmentResult::NotApplicable,
        }
    );
}

#[test]
fn test_scenario_batch_sampling() {
    logging::init_test();
    let records = sample_records(45, 5, 50);

    let result = QualityRateEngine::new()
        .calculate_by_plan(&records, &QualityPlanConfig::batch_sampling(Some(0.9)));

    assert_eq!(result.total_quantity, 50);
    assert_eq!(result.qualified_quantity, 45);
    assert_eq!(result.qualified_rate, 90.0);
    assert_eq!(result.judgment_result, JudgmentResult::Qualified);
}

#[test]
fn test_scenario_batch_sampling_below_default_threshold() {
    let records = sample_records(45, 5, 50);

    // 方案未配置阈值 → 默认 0.95
    let result = QualityRateEngine::new()
        .calculate_by_plan(&records, &QualityPlanConfig::batch_sampling(None));

    assert_eq!(result.qualified_rate, 90.0);
    assert_eq!(result.judgment_result, JudgmentResult::Unqualified);
}

#[test]
fn test_scenario_full_inspection_unified_rate() {
    logging::init_test();
    let records = individual_records(180, 20, Some(200));

    let result = QualityRateEngine::new().calculate_by_plan(
        &records,
        &QualityPlanConfig::batch_full_inspection(FullInspectionStrategy::UnifiedRate),
    );

    assert_eq!(result.total_quantity, 200);
    assert_eq!(result.qualified_quantity, 180);
    assert_eq!(result.qualified_rate, 90.0);
    assert_eq!(result.judgment_result, JudgmentResult::NotApplicable);
}

#[test]
fn test_scenario_full_inspection_per_item_recorded() {
    // 只录入了 10 件,批次声明 40 件
    let records = individual_records(9, 1, Some(40));

    let result = QualityRateEngine::new().calculate_by_plan(
        &records,
        &QualityPlanConfig::batch_full_inspection(FullInspectionStrategy::PerItemRecorded),
    );

    assert_eq!(result.total_quantity, 40);
    assert_eq!(result.qualified_quantity, 9);
    assert_eq!(result.qualified_rate, 22.5);
    assert_eq!(result.judgment_result, JudgmentResult::NotApplicable);
}

#[test]
fn test_scenario_unknown_configuration() {
    logging::init_test();
    let records = individual_records(5, 2, Some(7));
    let plan = QualityPlanConfig {
        inspection_object_type: None,
        inspection_type: Some(InspectionType::Sampling),
        full_inspection_strategy: None,
        sampling_threshold: Some(0.9),
    };

    assert_eq!(QualityRule::resolve(&plan), None);
    let result = QualityRateEngine::new().calculate_by_plan(&records, &plan);
    assert_eq!(result, CalculationResult::no_applicable_rule(7));
}

#[test]
fn test_unknown_enum_from_json_reaches_fallback() {
    let plan: QualityPlanConfig =
        serde_json::from_str(r#"{"inspectionObjectType": "BACTH", "inspectionType": "SAMPLING"}"#)
            .unwrap();
    let records = sample_records(3, 0, 3);

    let result = QualityRateEngine::new().calculate_by_plan(&records, &plan);
    assert_eq!(result.total_quantity, 3);
    assert_eq!(result.qualified_quantity, 0);
    assert_eq!(result.qualified_rate, 0.0);
    assert_eq!(result.judgment_result, JudgmentResult::NotApplicable);
}

// ==========================================
// 性质
// ==========================================

#[test]
fn test_zero_guard_for_primitives() {
    let samples = sample_records(4, 1, 5);
    let individuals = individual_records(4, 1, Some(5));

    for total in [None, Some(0), Some(-1)] {
        let rate = calculate_sample_qualified_rate(&samples, total);
        assert_eq!(rate.qualified_quantity, 0);
        assert_eq!(rate.qualified_rate, 0.0);

        let rate = calculate_batch_qualified_rate(&individuals, total);
        assert_eq!(rate.qualified_quantity, 0);
        assert_eq!(rate.qualified_rate, 0.0);
    }
}

#[test]
fn test_rate_bounded_by_record_share() {
    for total in 1..=12i64 {
        for qualified in 0..=6usize {
            let records = individual_records(qualified, 6 - qualified, None);
            let rate = calculate_batch_qualified_rate(&records, Some(total));
            let upper = 100.0 * records.len() as f64 / total as f64;

            assert!(rate.qualified_rate >= 0.0);
            // 舍入最多带来 0.005 的偏差
            assert!(rate.qualified_rate <= upper + 0.005, "total={total} qualified={qualified}");
            // 最多两位小数
            let scaled = rate.qualified_rate * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-6);
        }
    }
}

#[test]
fn test_rate_not_clamped_when_qualified_exceeds_total() {
    let records = individual_records(6, 0, Some(4));
    let result = QualityRateEngine::new().calculate_by_plan(
        &records,
        &QualityPlanConfig::batch_full_inspection(FullInspectionStrategy::UnifiedRate),
    );
    assert_eq!(result.qualified_rate, 150.0);
}

#[test]
fn test_one_third_rounds_to_two_decimals() {
    let records = individual_records(1, 2, None);
    let result = QualityRateEngine::new().calculate_by_plan(&records, &QualityPlanConfig::single_item());
    assert_eq!(result.qualified_rate, 33.33);
}

#[test]
fn test_idempotent_across_all_rules() {
    let engine = QualityRateEngine::new();
    let records = vec![
        RecordBuilder::new()
            .sample_status(true)
            .individual_status(false)
            .sample_total(3)
            .batch_total(9)
            .build(),
        RecordBuilder::new().sample_status(false).individual_status(true).build(),
    ];
    let plans = [
        QualityPlanConfig::single_item(),
        QualityPlanConfig::batch_sampling(Some(0.3)),
        QualityPlanConfig::batch_full_inspection(FullInspectionStrategy::UnifiedRate),
        QualityPlanConfig::batch_full_inspection(FullInspectionStrategy::PerItemRecorded),
        QualityPlanConfig::default(),
    ];

    for plan in &plans {
        let first = engine.calculate_by_plan(&records, plan);
        let second = engine.calculate_by_plan(&records, plan);
        assert_eq!(first, second);
    }
}

#[test]
fn test_status_fields_are_mode_exclusive() {
    // 样本合格 / 个体不合格
    let records = vec![RecordBuilder::new()
        .sample_status(true)
        .individual_status(false)
        .sample_total(1)
        .batch_total(1)
        .build()];
    let engine = QualityRateEngine::new();

    let sampling = engine.calculate_by_plan(&records, &QualityPlanConfig::batch_sampling(None));
    assert_eq!(sampling.qualified_quantity, 1);

    let unified = engine.calculate_by_plan(
        &records,
        &QualityPlanConfig::batch_full_inspection(FullInspectionStrategy::UnifiedRate),
    );
    assert_eq!(unified.qualified_quantity, 0);
}

// ==========================================
// 总量口径
// ==========================================

#[test]
fn test_first_record_wins_on_heterogeneous_totals() {
    logging::init_test();
    let mut records = sample_records(4, 0, 8);
    records[1].sample_total_quantity = Some(4);

    let result = QualityRateEngine::new()
        .calculate_by_plan(&records, &QualityPlanConfig::batch_sampling(None));
    assert_eq!(result.total_quantity, 8);
    assert_eq!(result.qualified_rate, 50.0);
}

#[test]
fn test_explicit_totals_match_first_record_convention() {
    let records = individual_records(7, 3, Some(20));
    let plan = QualityPlanConfig::batch_full_inspection(FullInspectionStrategy::PerItemRecorded);
    let engine = QualityRateEngine::new();

    let implicit = engine.calculate_by_plan(&records, &plan);
    let explicit =
        engine.calculate_by_plan_with_totals(&records, &plan, &BatchTotals::new(None, Some(20)));
    assert_eq!(implicit, explicit);

    // 显式缺失 → 记录数兜底
    let fallback = engine.calculate_by_plan_with_totals(&records, &plan, &BatchTotals::default());
    assert_eq!(fallback.total_quantity, 10);
    assert_eq!(fallback.qualified_rate, 70.0);
}

// ==========================================
// 配置注入
// ==========================================

#[test]
fn test_engine_from_config_threshold() {
    let engine = QualityRateEngine::from_config(&MockConfig::with_threshold(0.9)).unwrap();
    let records = sample_records(45, 5, 50);

    let result = engine.calculate_by_plan(&records, &QualityPlanConfig::batch_sampling(None));
    assert_eq!(result.judgment_result, JudgmentResult::Qualified);

    // 方案阈值优先于默认阈值
    let result = engine.calculate_by_plan(&records, &QualityPlanConfig::batch_sampling(Some(0.95)));
    assert_eq!(result.judgment_result, JudgmentResult::Unqualified);
}

#[test]
fn test_engine_from_default_mock_config() {
    let engine = QualityRateEngine::from_config(&MockConfig::default()).unwrap();
    assert_eq!(engine, QualityRateEngine::new());
}

#[test]
fn test_engine_from_broken_config() {
    assert!(QualityRateEngine::from_config(&MockConfig::broken()).is_err());
}

#[test]
fn test_judgment_thresholds() {
    let engine = QualityRateEngine::new();
    assert_eq!(engine.judge_batch_by_threshold(96.0, None), JudgmentResult::Qualified);
    assert_eq!(engine.judge_batch_by_threshold(94.0, None), JudgmentResult::Unqualified);
}

#[test]
fn test_single_item_with_batch_fields_set() {
    let plan = QualityPlanConfig {
        inspection_object_type: Some(InspectionObjectType::SingleItem),
        inspection_type: Some(InspectionType::FullInspection),
        full_inspection_strategy: Some(FullInspectionStrategy::UnifiedRate),
        sampling_threshold: None,
    };
    let records = individual_records(2, 2, Some(100));

    let result = QualityRateEngine::new().calculate_by_plan(&records, &plan);
    assert_eq!(result.total_quantity, 4);
    assert_eq!(result.qualified_rate, 50.0);
}
