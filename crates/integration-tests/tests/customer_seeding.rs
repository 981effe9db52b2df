//! Demo customer seeding against in-memory collaborators.

use std::collections::BTreeSet;

use videoshop_core::{Role, UnencryptedPassword, Username};
use videoshop_integration_tests::{DEMO_ADDRESSES, DEMO_CUSTOMER_USERNAMES, UnavailableCustomerStore};
use videoshop_storefront::accounts::{AccountDirectory, InMemoryAccountDirectory, password};
use videoshop_storefront::customers::{CustomerError, CustomerStore, InMemoryCustomerStore};
use videoshop_storefront::seed::{CustomerSeeder, DataInitializers, SeedError};

fn username(name: &str) -> Username {
    Username::parse(name).expect("valid username")
}

#[tokio::test]
async fn test_empty_shop_gets_five_accounts_and_four_customers() {
    let accounts = InMemoryAccountDirectory::new();
    let customers = InMemoryCustomerStore::new();

    CustomerSeeder::new(accounts.clone(), customers.clone())
        .run()
        .await
        .expect("seeding succeeds");

    let all = accounts.find_all().await.expect("list accounts");
    assert_eq!(all.len(), 5);
    assert_eq!(all.iter().filter(|a| a.has_role(&Role::boss())).count(), 1);
    assert_eq!(all.iter().filter(|a| a.has_role(&Role::customer())).count(), 4);
    assert_eq!(customers.count().await.expect("count customers"), 4);
}

#[tokio::test]
async fn test_boss_is_administrator() {
    let accounts = InMemoryAccountDirectory::new();
    CustomerSeeder::new(accounts.clone(), InMemoryCustomerStore::new())
        .run()
        .await
        .expect("seeding succeeds");

    let boss = accounts
        .find_by_username(&username("boss"))
        .await
        .expect("lookup")
        .expect("boss exists");
    assert!(boss.has_role(&Role::boss()));
    assert!(password::matches(&UnencryptedPassword::of("123"), &boss.password));
}

#[tokio::test]
async fn test_every_demo_username_is_a_customer() {
    let accounts = InMemoryAccountDirectory::new();
    CustomerSeeder::new(accounts.clone(), InMemoryCustomerStore::new())
        .run()
        .await
        .expect("seeding succeeds");

    for name in DEMO_CUSTOMER_USERNAMES {
        let account = accounts
            .find_by_username(&username(name))
            .await
            .expect("lookup")
            .unwrap_or_else(|| panic!("{name} missing"));
        assert!(account.has_role(&Role::customer()), "{name} lacks ROLE_CUSTOMER");
    }
}

#[tokio::test]
async fn test_customers_carry_the_demo_addresses() {
    let customers = InMemoryCustomerStore::new();
    CustomerSeeder::new(InMemoryAccountDirectory::new(), customers.clone())
        .run()
        .await
        .expect("seeding succeeds");

    let stored = customers.find_all().await.expect("list customers");
    let addresses: BTreeSet<&str> = stored.iter().map(|c| c.address.as_str()).collect();
    assert_eq!(addresses, BTreeSet::from(DEMO_ADDRESSES));

    let owners: BTreeSet<&str> = stored
        .iter()
        .map(|c| c.account.username.as_str())
        .collect();
    assert_eq!(owners, BTreeSet::from(DEMO_CUSTOMER_USERNAMES));
}

#[tokio::test]
async fn test_running_twice_equals_running_once() {
    let accounts = InMemoryAccountDirectory::new();
    let customers = InMemoryCustomerStore::new();
    let seeder = CustomerSeeder::new(accounts.clone(), customers.clone());

    seeder.run().await.expect("first run");
    let accounts_once = accounts.find_all().await.expect("list accounts");
    let customers_once = customers.find_all().await.expect("list customers");

    seeder.run().await.expect("second run");
    assert_eq!(accounts.find_all().await.expect("list accounts"), accounts_once);
    assert_eq!(customers.find_all().await.expect("list customers"), customers_once);
}

#[tokio::test]
async fn test_existing_boss_leaves_store_untouched() {
    let accounts = InMemoryAccountDirectory::new();
    accounts
        .create(&username("boss"), &UnencryptedPassword::of("other"), &[Role::boss()])
        .await
        .expect("create boss");
    let customers = InMemoryCustomerStore::new();

    CustomerSeeder::new(accounts.clone(), customers.clone())
        .run()
        .await
        .expect("seeding is skipped");

    assert_eq!(accounts.count().await.expect("count accounts"), 1);
    assert_eq!(customers.count().await.expect("count customers"), 0);
}

#[tokio::test]
async fn test_failed_bulk_save_keeps_created_accounts() {
    let accounts = InMemoryAccountDirectory::new();

    let err = CustomerSeeder::new(accounts.clone(), UnavailableCustomerStore)
        .run()
        .await
        .expect_err("bulk save fails");

    assert!(matches!(err, SeedError::Customers(CustomerError::Repository(_))));
    assert_eq!(accounts.count().await.expect("count accounts"), 5);
}

#[tokio::test]
async fn test_failed_run_is_not_repaired() {
    let accounts = InMemoryAccountDirectory::new();
    CustomerSeeder::new(accounts.clone(), UnavailableCustomerStore)
        .run()
        .await
        .expect_err("bulk save fails");

    // boss now exists, so a later run with a working store does nothing
    let customers = InMemoryCustomerStore::new();
    CustomerSeeder::new(accounts.clone(), customers.clone())
        .run()
        .await
        .expect("skipped");
    assert_eq!(customers.count().await.expect("count customers"), 0);
}

#[tokio::test]
async fn test_orchestrator_runs_customer_seeder() {
    let accounts = InMemoryAccountDirectory::new();
    let customers = InMemoryCustomerStore::new();
    let initializers =
        DataInitializers::new().with(CustomerSeeder::new(accounts.clone(), customers.clone()));

    assert_eq!(initializers.sequence(), vec!["customers"]);
    initializers.run_all().await.expect("initializers succeed");
    assert_eq!(customers.count().await.expect("count customers"), 4);
}
