/// Use cases module containing application business logic orchestration
mod find_free_port;

pub use find_free_port::FindFreePortUseCase;
