//! Static translation dictionaries.
//!
//! Every translated string on screen is a [`Text`] key. Lookups are an
//! exhaustive match per language, so a key without a translation does not
//! compile.

use crate::preferences::Language;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Text {
    // Navigation
    Dashboard,
    Expenses,
    Budgets,
    Reports,
    Settings,
    Logout,
    ComingSoon,
    ToggleSidebar,
    ToggleLanguage,
    ToggleTheme,

    // Dashboard
    TotalBalance,
    MonthlyExpenses,
    BudgetProgress,
    IncomeVsExpenses,
    RecentTransactions,
    TopSpendingCategories,
    Export,
    ChooseFormat,
    ExportUnavailable,
    FromLastMonth,
    GroceryShopping,
    SalaryDeposit,
    ElectricBill,
    FoodAndDining,
    Transportation,
    Entertainment,
    Income,

    // Expense form
    CreateExpense,
    Amount,
    Description,
    ExpirationDate,
    RepeatOptions,
    DoNotRepeat,
    Always,
    Installments,
    Frequency,
    Monthly,
    SemiAnnually,
    Annually,
    NumberOfInstallments,
    SubmitExpense,
    Submitting,
    ExpenseSaved,
}

impl Text {
    pub fn translate(self, language: Language) -> &'static str {
        match language {
            Language::En => english(self),
            Language::Pt => portuguese(self),
        }
    }
}

impl Language {
    pub fn text(self, key: Text) -> &'static str {
        key.translate(self)
    }
}

fn english(key: Text) -> &'static str {
    match key {
        Text::Dashboard => "Dashboard",
        Text::Expenses => "Expenses",
        Text::Budgets => "Budgets",
        Text::Reports => "Reports",
        Text::Settings => "Settings",
        Text::Logout => "Logout",
        Text::ComingSoon => "Coming soon",
        Text::ToggleSidebar => "Toggle sidebar",
        Text::ToggleLanguage => "Switch language",
        Text::ToggleTheme => "Switch theme",

        Text::TotalBalance => "Total Balance",
        Text::MonthlyExpenses => "Monthly Expenses",
        Text::BudgetProgress => "Budget Progress",
        Text::IncomeVsExpenses => "Income vs Expenses",
        Text::RecentTransactions => "Recent Transactions",
        Text::TopSpendingCategories => "Top Spending Categories",
        Text::Export => "Export",
        Text::ChooseFormat => "Choose format",
        Text::ExportUnavailable => "Export is not available yet.",
        Text::FromLastMonth => "from last month",
        Text::GroceryShopping => "Grocery Shopping",
        Text::SalaryDeposit => "Salary Deposit",
        Text::ElectricBill => "Electric Bill",
        Text::FoodAndDining => "Food & Dining",
        Text::Transportation => "Transportation",
        Text::Entertainment => "Entertainment",
        Text::Income => "Income",

        Text::CreateExpense => "Create Expense",
        Text::Amount => "Amount",
        Text::Description => "Description",
        Text::ExpirationDate => "Expiration Date",
        Text::RepeatOptions => "Repeat Options",
        Text::DoNotRepeat => "Do not repeat",
        Text::Always => "Always",
        Text::Installments => "Installments",
        Text::Frequency => "Frequency",
        Text::Monthly => "Monthly",
        Text::SemiAnnually => "Every 6 months",
        Text::Annually => "Annually",
        Text::NumberOfInstallments => "Number of Installments",
        Text::SubmitExpense => "Submit Expense",
        Text::Submitting => "Submitting...",
        Text::ExpenseSaved => "Expense saved.",
    }
}

fn portuguese(key: Text) -> &'static str {
    match key {
        Text::Dashboard => "Painel",
        Text::Expenses => "Despesas",
        Text::Budgets => "Orçamentos",
        Text::Reports => "Relatórios",
        Text::Settings => "Configurações",
        Text::Logout => "Sair",
        Text::ComingSoon => "Em breve",
        Text::ToggleSidebar => "Alternar menu lateral",
        Text::ToggleLanguage => "Mudar idioma",
        Text::ToggleTheme => "Mudar tema",

        Text::TotalBalance => "Saldo Total",
        Text::MonthlyExpenses => "Despesas Mensais",
        Text::BudgetProgress => "Progresso do Orçamento",
        Text::IncomeVsExpenses => "Receita vs Despesas",
        Text::RecentTransactions => "Transações Recentes",
        Text::TopSpendingCategories => "Principais Categorias de Gastos",
        Text::Export => "Exportar",
        Text::ChooseFormat => "Escolha o formato",
        Text::ExportUnavailable => "A exportação ainda não está disponível.",
        Text::FromLastMonth => "do mês passado",
        Text::GroceryShopping => "Compras de Supermercado",
        Text::SalaryDeposit => "Depósito de Salário",
        Text::ElectricBill => "Conta de Luz",
        Text::FoodAndDining => "Alimentação",
        Text::Transportation => "Transporte",
        Text::Entertainment => "Entretenimento",
        Text::Income => "Receita",

        Text::CreateExpense => "Criar Despesa",
        Text::Amount => "Valor",
        Text::Description => "Descrição",
        Text::ExpirationDate => "Data de Vencimento",
        Text::RepeatOptions => "Opções de Repetição",
        Text::DoNotRepeat => "Não repetir",
        Text::Always => "Sempre",
        Text::Installments => "Parcelado",
        Text::Frequency => "Frequência",
        Text::Monthly => "Mensal",
        Text::SemiAnnually => "A cada 6 meses",
        Text::Annually => "Anual",
        Text::NumberOfInstallments => "Número de Parcelas",
        Text::SubmitExpense => "Enviar Despesa",
        Text::Submitting => "Enviando...",
        Text::ExpenseSaved => "Despesa salva.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_follows_language() {
        assert_eq!(Language::En.text(Text::CreateExpense), "Create Expense");
        assert_eq!(Language::Pt.text(Text::CreateExpense), "Criar Despesa");
        assert_eq!(Text::Logout.translate(Language::Pt), "Sair");
    }

    #[test]
    fn test_toggling_language_switches_dictionary() {
        let language = Language::En;
        assert_eq!(language.text(Text::Dashboard), "Dashboard");
        assert_eq!(language.toggled().text(Text::Dashboard), "Painel");
    }
}
