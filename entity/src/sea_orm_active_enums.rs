use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum ApplicationType {
    #[sea_orm(string_value = "WEB")]
    Web,
    #[sea_orm(string_value = "DESKTOP")]
    Desktop,
    #[sea_orm(string_value = "MOBILE")]
    Mobile,
    #[sea_orm(string_value = "SAAS")]
    Saas,
    #[sea_orm(string_value = "MAINFRAME")]
    Mainframe,
    #[sea_orm(string_value = "MIDDLEWARE")]
    Middleware,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum ApplicationStatus {
    #[sea_orm(string_value = "Running")]
    Running,
    #[sea_orm(string_value = "InProgress")]
    InProgress,
    #[sea_orm(string_value = "Planned")]
    Planned,
    #[sea_orm(string_value = "Retired")]
    Retired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum ProcessStatus {
    #[sea_orm(string_value = "NotStarted")]
    NotStarted,
    #[sea_orm(string_value = "InProgress")]
    InProgress,
    #[sea_orm(string_value = "Completed")]
    Completed,
    #[sea_orm(string_value = "OnHold")]
    OnHold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum BusinessFunctionType {
    #[sea_orm(string_value = "Core")]
    Core,
    #[sea_orm(string_value = "Support")]
    Support,
    #[sea_orm(string_value = "Management")]
    Management,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum ResourcesRequired {
    #[sea_orm(string_value = "Low")]
    Low,
    #[sea_orm(string_value = "Medium")]
    Medium,
    #[sea_orm(string_value = "High")]
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum CurrencySuccessor {
    #[sea_orm(string_value = "K")]
    K,
    #[sea_orm(string_value = "M")]
    M,
    #[sea_orm(string_value = "RAW")]
    Raw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum SpendTargetKind {
    #[sea_orm(string_value = "Technology")]
    Technology,
    #[sea_orm(string_value = "Expenditure")]
    Expenditure,
}
