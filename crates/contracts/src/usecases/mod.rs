pub mod u501_cpf_screening;
