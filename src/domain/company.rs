use std::collections::BTreeMap;

use serde::Serialize;

/// A hand-authored company mixing sequences and mappings at several levels.
/// Nothing in it is random.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CompanyRecord {
    pub company: &'static str,
    pub established: u16,
    pub locations: Vec<Location>,
    pub departments: BTreeMap<&'static str, Department>,
    pub products: Vec<ProductStub>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub name: &'static str,
    pub employees: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub manager: &'static str,
    pub budget: u64,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProductStub {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u32,
}

impl CompanyRecord {
    pub fn sample() -> Self {
        let location = |name, employees| Location { name, employees };
        let department = |manager, budget| Department { manager, budget };
        let product = |id, name, price| ProductStub { id, name, price };

        Self {
            company: "サンプル株式会社",
            established: 1995,
            locations: vec![
                location("東京本社", 120),
                location("大阪支店", 45),
                location("名古屋支店", 30),
            ],
            departments: BTreeMap::from([
                ("営業部", department("山田太郎", 5_000_000)),
                ("開発部", department("佐藤花子", 8_000_000)),
                ("人事部", department("鈴木次郎", 3_000_000)),
            ]),
            products: vec![
                product("P001", "製品A", 2000),
                product("P002", "製品B", 3500),
                product("P003", "製品C", 1800),
            ],
        }
    }
}
