pub mod analysis_decision;
pub mod block_type;
pub mod contract_type;
pub mod employee_bond;
pub mod task_alias;

pub use analysis_decision::AnalysisDecision;
pub use block_type::BlockType;
pub use contract_type::ContractType;
pub use employee_bond::EmployeeBond;
pub use task_alias::TaskAlias;
