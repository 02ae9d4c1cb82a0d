//! Demo accounts and sample directory records for an empty store.

use std::sync::Arc;

use tracing::info;

use hrms_auth::password::PasswordHasher;
use hrms_core::error::AppError;
use hrms_core::traits::Repository;
use hrms_database::{EmployeeRepository, UserRepository};
use hrms_entity::employee::CreateEmployee;
use hrms_entity::user::{CreateUser, Role};

/// `(name, email, password, role)` of each default account.
pub const DEFAULT_ACCOUNTS: [(&str, &str, &str, Role); 3] = [
    ("Admin User", "admin@example.com", "admin123", Role::Admin),
    ("HR Manager", "hr@example.com", "hr123", Role::Hr),
    ("John Doe", "employee@example.com", "emp123", Role::Employee),
];

/// `(name, department, job_role, salary)` of each sample employee.
pub const SAMPLE_EMPLOYEES: [(&str, &str, &str, f64); 8] = [
    ("Alice Johnson", "Engineering", "Software Engineer", 85000.0),
    ("Bob Smith", "HR", "HR Manager", 75000.0),
    ("Carol Williams", "Finance", "Senior Accountant", 70000.0),
    ("David Brown", "Sales", "Sales Executive", 65000.0),
    ("Eve Davis", "Marketing", "Marketing Specialist", 68000.0),
    ("Frank Miller", "Engineering", "Senior Software Engineer", 95000.0),
    ("Grace Wilson", "Engineering", "DevOps Engineer", 90000.0),
    ("Henry Taylor", "Finance", "Financial Analyst", 72000.0),
];

/// Populates an empty store.
#[derive(Clone)]
pub struct Seeder {
    users: Arc<dyn UserRepository>,
    employees: Arc<dyn EmployeeRepository>,
    hasher: Arc<PasswordHasher>,
}

impl Seeder {
    /// Creates a new seeder.
    pub fn new(
        users: Arc<dyn UserRepository>,
        employees: Arc<dyn EmployeeRepository>,
        hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            users,
            employees,
            hasher,
        }
    }

    /// Insert the default accounts and sample employees unless any user
    /// already exists. Returns whether anything was written.
    pub async fn seed_if_empty(&self) -> Result<bool, AppError> {
        if self.users.count().await? > 0 {
            info!("Store already seeded, skipping");
            return Ok(false);
        }

        let mut accounts = Vec::with_capacity(DEFAULT_ACCOUNTS.len());
        for (name, email, password, role) in DEFAULT_ACCOUNTS {
            accounts.push(CreateUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash: self.hasher.hash_password(password)?,
                role,
            });
        }

        let records: Vec<CreateEmployee> = SAMPLE_EMPLOYEES
            .iter()
            .map(|&(name, department, job_role, salary)| CreateEmployee {
                name: name.to_string(),
                department: department.to_string(),
                job_role: job_role.to_string(),
                salary,
            })
            .collect();

        // Accounts and records land together or not at all, so a failed
        // run leaves the store empty and the next start seeds again.
        self.employees.create_batch(&accounts, &records).await?;

        info!(
            accounts = DEFAULT_ACCOUNTS.len(),
            employees = SAMPLE_EMPLOYEES.len(),
            "Seeded default accounts and sample employees"
        );
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hrms_core::config::AuthConfig;
    use hrms_database::MemoryStore;

    fn seeder(store: &MemoryStore) -> (Seeder, Arc<PasswordHasher>) {
        let config = AuthConfig {
            hash_memory_kib: 64,
            hash_iterations: 1,
            ..AuthConfig::default()
        };
        let hasher = Arc::new(PasswordHasher::new(&config).unwrap());
        let seeder = Seeder::new(
            Arc::new(store.users()),
            Arc::new(store.employees()),
            hasher.clone(),
        );
        (seeder, hasher)
    }

    #[tokio::test]
    async fn test_seeds_once() {
        let store = MemoryStore::new();
        let (seeder, hasher) = seeder(&store);

        assert!(seeder.seed_if_empty().await.unwrap());
        assert!(!seeder.seed_if_empty().await.unwrap());

        assert_eq!(store.users().count().await.unwrap(), 3);
        assert_eq!(store.employees().count().await.unwrap(), 8);

        let admin = store
            .users()
            .find_by_email("admin@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert!(hasher.verify_password("admin123", &admin.password_hash));
    }

    #[tokio::test]
    async fn test_skips_store_with_existing_account() {
        let store = MemoryStore::new();
        let (seeder, hasher) = seeder(&store);
        store
            .users()
            .create(&CreateUser {
                name: "Existing".to_string(),
                email: "admin@example.com".to_string(),
                password_hash: hasher.hash_password("secret").unwrap(),
                role: Role::Admin,
            })
            .await
            .unwrap();

        assert!(!seeder.seed_if_empty().await.unwrap());
        assert_eq!(store.users().count().await.unwrap(), 1);
        assert_eq!(store.employees().count().await.unwrap(), 0);
    }
}
