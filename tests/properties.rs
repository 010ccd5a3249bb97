//! Property tests for the payroll calculator and PAYE bracket walk.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use payroll_engine::calculation::{apply_tax_brackets, calculate_payroll, sum_categories};
use payroll_engine::models::{CategoryAmounts, EmployeeCompensationInput, PayrollSettings, TaxBracket};

fn kenya_settings() -> PayrollSettings {
    PayrollSettings {
        personal_relief: dec!(2400),
        nssf_employee_rate: dec!(0.06),
        nssf_employer_rate: dec!(0.06),
        nssf_max_contribution: dec!(4320),
        shif_employee_rate: dec!(0.0275),
        shif_employer_rate: dec!(0),
        ahl_employee_rate: dec!(0.015),
        ahl_employer_rate: dec!(0.015),
        paye_brackets: vec![
            TaxBracket::bounded(dec!(0), dec!(24000), dec!(0.10)),
            TaxBracket::bounded(dec!(24001), dec!(32333), dec!(0.25)),
            TaxBracket::bounded(dec!(32334), dec!(500000), dec!(0.30)),
            TaxBracket::bounded(dec!(500001), dec!(800000), dec!(0.325)),
            TaxBracket::unbounded(dec!(800001), dec!(0.35)),
        ],
    }
}

/// Shillings and cents up to ten million.
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn categories() -> impl Strategy<Value = CategoryAmounts> {
    prop::collection::btree_map(
        "[a-z_]{1,12}",
        prop::option::of((0i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))),
        0..6,
    )
}

fn compensation() -> impl Strategy<Value = EmployeeCompensationInput> {
    (amount(), categories(), categories(), amount(), amount(), amount()).prop_map(
        |(basic_salary, allowances, voluntary_deductions, helb_amount, bonuses, overtime)| {
            EmployeeCompensationInput {
                basic_salary,
                allowances,
                voluntary_deductions,
                helb_amount,
                bonuses,
                overtime,
            }
        },
    )
}

proptest! {
    #[test]
    fn calculation_is_deterministic(input in compensation()) {
        let settings = kenya_settings();
        prop_assert_eq!(calculate_payroll(&input, &settings), calculate_payroll(&input, &settings));
    }

    #[test]
    fn breakdown_invariants_hold(input in compensation()) {
        let b = calculate_payroll(&input, &kenya_settings());

        prop_assert_eq!(b.gross_salary, b.basic_salary + b.allowances_total + b.bonuses + b.overtime);
        prop_assert_eq!(b.taxable_income, b.gross_salary - b.nssf_employee - b.shif_employee);
        prop_assert_eq!(
            b.paye_after_relief,
            (b.paye_before_relief - b.personal_relief).max(Decimal::ZERO)
        );
        prop_assert_eq!(
            b.total_deductions,
            b.nssf_employee + b.shif_employee + b.ahl_employee + b.helb
                + b.voluntary_deductions_total + b.paye_after_relief
        );
        prop_assert_eq!(b.net_salary, b.gross_salary - b.total_deductions);
        prop_assert_eq!(
            b.total_employer_cost,
            b.gross_salary + b.nssf_employer + b.shif_employer + b.ahl_employer
        );
    }

    #[test]
    fn relief_never_produces_negative_tax(input in compensation()) {
        let b = calculate_payroll(&input, &kenya_settings());
        prop_assert!(b.paye_after_relief >= Decimal::ZERO);
    }

    #[test]
    fn nssf_never_exceeds_cap(input in compensation()) {
        let settings = kenya_settings();
        let b = calculate_payroll(&input, &settings);

        prop_assert!(b.nssf_employee <= settings.nssf_max_contribution);
        if b.gross_salary * settings.nssf_employee_rate > settings.nssf_max_contribution {
            prop_assert_eq!(b.nssf_employee, settings.nssf_max_contribution);
            prop_assert_eq!(b.nssf_employer, settings.nssf_max_contribution);
        }
    }

    #[test]
    fn absent_and_null_categories_change_nothing(
        input in compensation(),
        key in "[A-Z]{3,8}",
    ) {
        let settings = kenya_settings();
        let mut with_null = input.clone();
        with_null.allowances.insert(key.clone(), None);
        with_null.voluntary_deductions.insert(key.clone(), Some(Decimal::ZERO));

        prop_assert_eq!(calculate_payroll(&input, &settings), calculate_payroll(&with_null, &settings));
    }

    #[test]
    fn category_sum_matches_values(amounts in categories()) {
        let expected: Decimal = amounts.values().map(|v| v.unwrap_or(Decimal::ZERO)).sum();
        prop_assert_eq!(sum_categories(&amounts), expected);
    }

    #[test]
    fn tax_is_monotonic_in_income(a in amount(), b in amount()) {
        let brackets = kenya_settings().paye_brackets;
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(apply_tax_brackets(low, &brackets) <= apply_tax_brackets(high, &brackets));
    }

    #[test]
    fn non_positive_income_is_untaxed(cents in -1_000_000_000i64..=0) {
        let brackets = kenya_settings().paye_brackets;
        prop_assert_eq!(apply_tax_brackets(Decimal::new(cents, 2), &brackets), Decimal::ZERO);
    }
}
