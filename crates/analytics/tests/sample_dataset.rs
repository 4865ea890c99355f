use analytics::SalesAnalyzer;
use core_types::SalesData;
use rust_decimal_macros::dec;
use strategies::Strategies;

const SAMPLE: &str = include_str!("../../../fixtures/sample_sales.json");

#[test]
fn sample_dataset_produces_expected_report() {
    let data = SalesData::from_json_str(SAMPLE).unwrap();
    let config = configuration::load_config_from_str(include_str!("../../../config.toml")).unwrap();
    let strategies = Strategies::from_settings(&config.strategies).unwrap();

    let report = SalesAnalyzer::new(config.analysis)
        .analyze(&data, &strategies)
        .unwrap();

    let order: Vec<_> = report.iter().map(|r| r.seller_id.as_str()).collect();
    assert_eq!(order, vec!["seller_1", "seller_2", "seller_3", "seller_4"]);

    let leader = &report[0];
    assert_eq!(leader.name, "Alexey Petrov");
    assert_eq!(leader.revenue, dec!(174.60));
    assert_eq!(leader.profit, dec!(77.30));
    assert_eq!(leader.sales_count, 2);
    // 77.3 * 0.15 = 11.595
    assert_eq!(leader.bonus, dec!(11.60));
    let top: Vec<_> = leader
        .top_products
        .iter()
        .map(|p| (p.sku.as_str(), p.quantity))
        .collect();
    assert_eq!(top, vec![("SKU_003", 10), ("SKU_002", 4), ("SKU_001", 2)]);

    assert_eq!(report[1].revenue, dec!(162.25));
    assert_eq!(report[1].profit, dec!(76.75));
    // 76.75 * 0.10 = 7.675
    assert_eq!(report[1].bonus, dec!(7.68));

    assert_eq!(report[2].profit, dec!(13.95));
    assert_eq!(report[2].bonus, dec!(1.40));

    assert_eq!(report[3].profit, dec!(5.70));
    assert_eq!(report[3].bonus, dec!(0));
}

#[test]
fn sample_report_serializes_to_json() {
    let data = SalesData::from_json_str(SAMPLE).unwrap();
    let report = SalesAnalyzer::default()
        .analyze(&data, &Strategies::standard())
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    let first = &json[0];
    assert_eq!(first["seller_id"], "seller_1");
    assert_eq!(first["sales_count"], 2);
    assert_eq!(first["top_products"][0]["sku"], "SKU_003");
    assert_eq!(first["top_products"][0]["quantity"], 10);
}
