//! Override hook ordering and `can_update` integration.

use anyhow::{Result, bail, ensure};
use ortho_defaults::{Defaults, SetDefaults, can_update};
use rstest::rstest;

#[derive(Debug, Default, Clone, Defaults)]
#[defaults(hook)]
struct Endpoint {
    #[defaults(value = "localhost")]
    host: String,
    #[defaults(value = "8080")]
    port: u16,
    #[defaults(skip)]
    address: String,
    #[defaults(skip)]
    hook_runs: u32,
}

impl SetDefaults for Endpoint {
    fn set_defaults(&mut self) {
        self.hook_runs += 1;
        if can_update(&self.address) {
            self.address = format!("{}:{}", self.host, self.port);
        }
    }
}

#[derive(Debug, Default, Defaults)]
#[defaults(hook)]
struct Service {
    primary: Endpoint,
    #[defaults(value = r#"[{"host": "a"}, {"host": "b", "port": 1}]"#)]
    replicas: Vec<Endpoint>,
    fallback: Option<Endpoint>,
    #[defaults(skip)]
    summary: String,
}

impl SetDefaults for Service {
    fn set_defaults(&mut self) {
        if can_update(&self.summary) {
            // Nested hooks have already run.
            self.summary = self.primary.address.clone();
        }
    }
}

#[test]
fn hook_sees_declarative_defaults() -> Result<()> {
    let mut endpoint = Endpoint::default();
    ortho_defaults::set(&mut endpoint)?;
    ensure!(endpoint.address == "localhost:8080", "{endpoint:?}");
    ensure!(endpoint.hook_runs == 1, "hook ran {} times", endpoint.hook_runs);
    Ok(())
}

#[test]
fn hook_respects_caller_values() -> Result<()> {
    let mut endpoint = Endpoint {
        address: "example.org:443".to_owned(),
        ..Endpoint::default()
    };
    ortho_defaults::set(&mut endpoint)?;
    ensure!(endpoint.address == "example.org:443", "{endpoint:?}");
    ensure!(endpoint.host == "localhost", "{endpoint:?}");
    Ok(())
}

#[test]
fn nested_hooks_run_before_the_enclosing_hook() -> Result<()> {
    let mut service = Service::default();
    ortho_defaults::set(&mut service)?;
    ensure!(service.summary == "localhost:8080", "{service:?}");
    Ok(())
}

#[test]
fn hooks_run_for_literal_elements_and_allocated_options() -> Result<()> {
    let mut service = Service::default();
    ortho_defaults::set(&mut service)?;
    let addresses: Vec<_> = service
        .replicas
        .iter()
        .map(|replica| replica.address.as_str())
        .collect();
    ensure!(addresses == ["a:8080", "b:1"], "replicas: {addresses:?}");
    ensure!(
        service.replicas.iter().all(|replica| replica.hook_runs == 1),
        "each replica hook runs once: {:?}",
        service.replicas
    );
    let Some(fallback) = service.fallback else {
        bail!("fallback should be allocated");
    };
    ensure!(fallback.address == "localhost:8080", "{fallback:?}");
    Ok(())
}

#[rstest]
#[case::once(1)]
#[case::twice(2)]
#[case::thrice(3)]
fn hooks_run_once_per_call(#[case] calls: u32) -> Result<()> {
    let mut endpoint = Endpoint::default();
    for _ in 0..calls {
        ortho_defaults::set(&mut endpoint)?;
    }
    ensure!(endpoint.hook_runs == calls, "hook ran {} times", endpoint.hook_runs);
    ensure!(endpoint.address == "localhost:8080", "{endpoint:?}");
    Ok(())
}

#[derive(Debug, Default, Defaults)]
#[defaults(hook)]
struct Broken {
    #[defaults(value = "not a number")]
    count: u32,
    #[defaults(skip)]
    hooked: bool,
}

impl SetDefaults for Broken {
    fn set_defaults(&mut self) {
        self.hooked = true;
    }
}

#[test]
fn hook_is_not_run_after_a_failure() -> Result<()> {
    let mut broken = Broken::default();
    ensure!(ortho_defaults::set(&mut broken).is_err(), "parse must fail");
    ensure!(!broken.hooked, "hook ran despite the failure");
    Ok(())
}
