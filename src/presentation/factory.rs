//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the binary.

use kvseed::application::{ClearUseCase, PublishUseCase, VerifyUseCase};
use kvseed::domain::ports::PublishEventSink;
use kvseed::infrastructure::{ConsoleEventSink, ConsulKvStore, JsonEventSink, SystemHostname};
use kvseed::ui::detect_capabilities;
use kvseed::{Config, KvseedResult};

pub type ConcretePublishUseCase = PublishUseCase<ConsulKvStore, SystemHostname>;
pub type ConcreteVerifyUseCase = VerifyUseCase<ConsulKvStore, SystemHostname>;
pub type ConcreteClearUseCase = ClearUseCase<ConsulKvStore, SystemHostname>;

/// NDJSON on stdout in `--json` mode, styled text otherwise
pub fn create_event_sink(json: bool) -> Box<dyn PublishEventSink> {
    if json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdout(detect_capabilities()))
    }
}

fn create_store(config: &Config) -> KvseedResult<ConsulKvStore> {
    ConsulKvStore::new(config.store_url()?, config.timeout())
}

pub fn create_publish_use_case(config: &Config, json: bool) -> KvseedResult<ConcretePublishUseCase> {
    Ok(PublishUseCase::new(create_store(config)?, SystemHostname)
        .with_events(create_event_sink(json)))
}

pub fn create_verify_use_case(config: &Config, json: bool) -> KvseedResult<ConcreteVerifyUseCase> {
    Ok(VerifyUseCase::new(create_store(config)?, SystemHostname)
        .with_events(create_event_sink(json)))
}

pub fn create_clear_use_case(config: &Config, json: bool) -> KvseedResult<ConcreteClearUseCase> {
    Ok(ClearUseCase::new(create_store(config)?, SystemHostname)
        .with_events(create_event_sink(json)))
}
