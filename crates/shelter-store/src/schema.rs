//! Fixed definitions of the seven target tables.

use shelter_model::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub sql_type: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    /// Set for lookup tables.
    pub category: Option<Category>,
    pub columns: &'static [ColumnDef],
    pub foreign_keys: &'static [&'static str],
}

const fn lookup(category: Category, columns: &'static [ColumnDef]) -> TableDef {
    TableDef {
        name: category.table_name(),
        category: Some(category),
        columns,
        foreign_keys: &[],
    }
}

const LOOKUP_ID: ColumnDef = ColumnDef {
    name: "id",
    sql_type: "INTEGER NOT NULL UNIQUE",
};

pub const ANIMALS: &str = "Animals";
pub const SHELTER: &str = "Shelter";

/// Tables in creation order; parents precede the tables referencing them.
pub static TABLES: [TableDef; 7] = [
    lookup(
        Category::Color,
        &[
            LOOKUP_ID,
            ColumnDef {
                name: "color",
                sql_type: "VARCHAR(40)",
            },
        ],
    ),
    lookup(
        Category::Type,
        &[
            LOOKUP_ID,
            ColumnDef {
                name: "type",
                sql_type: "VARCHAR(40)",
            },
        ],
    ),
    lookup(
        Category::Breed,
        &[
            LOOKUP_ID,
            ColumnDef {
                name: "breed",
                sql_type: "VARCHAR(40)",
            },
        ],
    ),
    lookup(
        Category::OutcomeSubtype,
        &[
            LOOKUP_ID,
            ColumnDef {
                name: "outcome_subtype",
                sql_type: "VARCHAR(40)",
            },
        ],
    ),
    lookup(
        Category::OutcomeType,
        &[
            LOOKUP_ID,
            ColumnDef {
                name: "outcome_type",
                sql_type: "VARCHAR(40)",
            },
        ],
    ),
    TableDef {
        name: ANIMALS,
        category: None,
        columns: &[
            ColumnDef {
                name: "id",
                sql_type: "VARCHAR(10) NOT NULL UNIQUE",
            },
            ColumnDef {
                name: "type_id",
                sql_type: "INTEGER NOT NULL",
            },
            ColumnDef {
                name: "name",
                sql_type: "VARCHAR",
            },
            ColumnDef {
                name: "breed_id",
                sql_type: "INTEGER NOT NULL",
            },
            ColumnDef {
                name: "color1_id",
                sql_type: "INTEGER NOT NULL",
            },
            ColumnDef {
                name: "color2_id",
                sql_type: "INTEGER",
            },
            ColumnDef {
                name: "date_of_birth",
                sql_type: "TIMESTAMP",
            },
        ],
        foreign_keys: &[
            "FOREIGN KEY (type_id) REFERENCES Type_Dict (id)",
            "FOREIGN KEY (breed_id) REFERENCES Breed_Dict (id)",
            "FOREIGN KEY (color1_id) REFERENCES Color_Dict (id)",
            "FOREIGN KEY (color2_id) REFERENCES Color_Dict (id)",
        ],
    },
    TableDef {
        name: SHELTER,
        category: None,
        columns: &[
            ColumnDef {
                name: "id",
                sql_type: "VARCHAR(10) NOT NULL UNIQUE",
            },
            ColumnDef {
                name: "animal_id",
                sql_type: "VARCHAR(10) NOT NULL",
            },
            ColumnDef {
                name: "outcome_subtype_id",
                sql_type: "INTEGER",
            },
            ColumnDef {
                name: "outcome_month",
                sql_type: "INTEGER",
            },
            ColumnDef {
                name: "outcome_year",
                sql_type: "INTEGER",
            },
            ColumnDef {
                name: "outcome_type_id",
                sql_type: "INTEGER",
            },
            ColumnDef {
                name: "age_upon_outcome",
                sql_type: "VARCHAR(20)",
            },
        ],
        foreign_keys: &[
            "FOREIGN KEY (animal_id) REFERENCES Animals (id)",
            "FOREIGN KEY (outcome_subtype_id) REFERENCES Outcome_subtypes (id)",
            "FOREIGN KEY (outcome_type_id) REFERENCES Outcome_types (id)",
        ],
    },
];

impl TableDef {
    pub fn create_statement(&self) -> String {
        let mut lines: Vec<String> = self
            .columns
            .iter()
            .map(|column| format!("    {} {}", column.name, column.sql_type))
            .collect();
        lines.extend(self.foreign_keys.iter().map(|fk| format!("    {fk}")));
        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n{}\n);",
            self.name,
            lines.join(",\n")
        )
    }
}

/// Look up a table by name, ignoring ASCII case.
pub fn table_def(name: &str) -> Option<&'static TableDef> {
    TABLES
        .iter()
        .find(|table| table.name.eq_ignore_ascii_case(name))
}

/// `CREATE TABLE IF NOT EXISTS` statements for every table, in order.
pub fn create_statements() -> Vec<String> {
    TABLES.iter().map(TableDef::create_statement).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_tables_follow_category_order() {
        let categories: Vec<Category> = TABLES.iter().filter_map(|t| t.category).collect();
        assert_eq!(categories, Category::ALL.to_vec());
    }

    #[test]
    fn lookup_value_columns_match_categories() {
        for table in TABLES.iter().filter(|t| t.category.is_some()) {
            let category = table.category.expect("lookup table");
            assert_eq!(table.columns[1].name, category.value_column());
        }
    }

    #[test]
    fn table_def_ignores_case() {
        assert_eq!(table_def("animals").map(|t| t.name), Some(ANIMALS));
        assert!(table_def("Owners").is_none());
    }
}
