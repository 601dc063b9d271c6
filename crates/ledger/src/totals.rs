use crate::{MoneyCents, Record, RecordKind};

/// Aggregate figures derived from a record sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub income: MoneyCents,
    pub expense: MoneyCents,
    pub net: MoneyCents,
}

impl Totals {
    /// Sums income and expense values; `net = income - expense`.
    ///
    /// Figures past the `i64` cent range stick at [`MoneyCents::MAX`] or
    /// [`MoneyCents::MIN`].
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let (income, expense) = records.into_iter().fold(
            (MoneyCents::ZERO, MoneyCents::ZERO),
            |(income, expense), record| match record.kind {
                RecordKind::Income => (saturating_add(income, record.value), expense),
                RecordKind::Expense => (income, saturating_add(expense, record.value)),
            },
        );

        let net = income.checked_sub(expense).unwrap_or_else(|| {
            tracing::warn!("net total out of range");
            if expense.cents() < 0 {
                MoneyCents::MAX
            } else {
                MoneyCents::MIN
            }
        });

        Self {
            income,
            expense,
            net,
        }
    }
}

fn saturating_add(total: MoneyCents, value: MoneyCents) -> MoneyCents {
    total.checked_add(value).unwrap_or_else(|| {
        tracing::warn!("total out of range");
        if value.cents() > 0 {
            MoneyCents::MAX
        } else {
            MoneyCents::MIN
        }
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::RecordId;

    fn record(kind: RecordKind, cents: i64) -> Record {
        Record {
            id: RecordId::new(),
            name: "r".to_string(),
            kind,
            value: MoneyCents::new(cents),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn empty_sequence_is_zero() {
        assert_eq!(Totals::from_records(&Vec::<Record>::new()), Totals::default());
    }

    #[test]
    fn salary_and_coffee() {
        let records = [
            record(RecordKind::Expense, 450),
            record(RecordKind::Income, 200_000),
        ];

        let totals = Totals::from_records(&records);
        assert_eq!(totals.income.to_string(), "2000.00");
        assert_eq!(totals.expense.to_string(), "4.50");
        assert_eq!(totals.net.to_string(), "1995.50");
    }

    #[test]
    fn net_is_income_minus_expense() {
        let records = [
            record(RecordKind::Income, 1),
            record(RecordKind::Expense, 333),
            record(RecordKind::Income, -25),
            record(RecordKind::Expense, 0),
            record(RecordKind::Income, 10_001),
            record(RecordKind::Expense, -7),
        ];

        for len in 0..=records.len() {
            let totals = Totals::from_records(&records[..len]);
            assert_eq!(totals.income.checked_sub(totals.expense), Some(totals.net));
        }
        let totals = Totals::from_records(&records);
        assert_eq!(totals.income, MoneyCents::new(9_977));
        assert_eq!(totals.expense, MoneyCents::new(326));
    }

    #[test]
    fn out_of_range_totals_saturate() {
        let huge = 9_000_000_000_000_000_000;
        let records = [
            record(RecordKind::Income, huge),
            record(RecordKind::Income, huge),
        ];
        let totals = Totals::from_records(&records);
        assert_eq!(totals.income, MoneyCents::MAX);
        assert_eq!(totals.net, MoneyCents::MAX);

        let records = [
            record(RecordKind::Income, huge),
            record(RecordKind::Expense, -huge),
        ];
        let totals = Totals::from_records(&records);
        assert_eq!(totals.income, MoneyCents::new(huge));
        assert_eq!(totals.expense, MoneyCents::new(-huge));
        assert_eq!(totals.net, MoneyCents::MAX);

        let records = [
            record(RecordKind::Income, -huge),
            record(RecordKind::Expense, huge),
        ];
        assert_eq!(Totals::from_records(&records).net, MoneyCents::MIN);
    }
}
