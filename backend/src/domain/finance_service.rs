use anyhow::Result;
use log::debug;
use shared::{DriverSalary, Transaction};
use std::sync::Arc;

use crate::storage::fixtures::SALARY_PERIOD_LABEL;
use crate::storage::memory::MemoryConnection;
use crate::storage::traits::FinanceStorage;
use crate::storage::FinanceRepository;

/// Read-only access to payments and driver payouts. Nothing here mutates.
#[derive(Clone)]
pub struct FinanceService {
    finance_repository: FinanceRepository,
}

impl FinanceService {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        Self {
            finance_repository: FinanceRepository::new(connection),
        }
    }

    pub fn list_transactions(&self) -> Result<Vec<Transaction>> {
        let transactions = self.finance_repository.list_transactions()?;
        debug!("Loaded {} transactions", transactions.len());
        Ok(transactions)
    }

    pub fn list_salaries(&self) -> Result<Vec<DriverSalary>> {
        let salaries = self.finance_repository.list_salaries()?;
        debug!("Loaded {} salary records", salaries.len());
        Ok(salaries)
    }

    /// Heading of the salary tab, e.g. "September 2023"
    pub fn salary_period_label(&self) -> &'static str {
        SALARY_PERIOD_LABEL
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::memory::test_utils::TestHelper;
    use shared::{PaymentMode, PaymentStatus, SalaryStatus};

    #[test]
    fn test_transactions_are_fixture_rows() {
        let helper = TestHelper::new();
        let transactions = helper.backend.finance_service.list_transactions().unwrap();

        assert_eq!(transactions.len(), 3);
        assert_eq!(transactions[1].mode, PaymentMode::BankTransfer);
        assert_eq!(transactions[2].status, PaymentStatus::Pending);
    }

    #[test]
    fn test_salaries_are_fixture_rows() {
        let helper = TestHelper::new();
        let service = &helper.backend.finance_service;
        let salaries = service.list_salaries().unwrap();

        assert_eq!(salaries.len(), 2);
        assert_eq!(salaries[0].status, SalaryStatus::Paid);
        assert!(salaries[0].payout_date.is_some());
        assert_eq!(salaries[1].status, SalaryStatus::Pending);
        assert_eq!(salaries[1].payout_date, None);
        assert_eq!(service.salary_period_label(), "September 2023");
    }

    #[test]
    fn test_empty_store_has_no_finance_rows() {
        let helper = TestHelper::empty();
        assert!(helper.backend.finance_service.list_transactions().unwrap().is_empty());
    }
}
