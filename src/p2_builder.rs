//! Pattern 2: Builder
//!
//! Constructors (and static factories) do not scale to many optional
//! parameters. Two common workarounds are shown first, then the builder.

use serde::Deserialize;
use tracing::debug;

use crate::section;

// ============================================================================
// Anti-pattern: Telescoping constructors
// ============================================================================

/// Every constructor adds one more optional part and delegates to the next.
#[derive(Debug, Clone, PartialEq)]
pub struct TelescopingNotebook {
    // required
    pub motherboard: String,
    pub power_supply: String,
    pub cpu: String,

    // optional
    pub computer_case: Option<String>,
    pub video_card: Option<String>,
    pub input_device: Option<String>,
    pub output_device: Option<String>,
}

impl TelescopingNotebook {
    pub fn new(motherboard: &str, power_supply: &str, cpu: &str) -> Self {
        Self::with_case(motherboard, power_supply, cpu, None)
    }

    pub fn with_case(
        motherboard: &str,
        power_supply: &str,
        cpu: &str,
        computer_case: Option<&str>,
    ) -> Self {
        Self::with_video_card(motherboard, power_supply, cpu, computer_case, None)
    }

    pub fn with_video_card(
        motherboard: &str,
        power_supply: &str,
        cpu: &str,
        computer_case: Option<&str>,
        video_card: Option<&str>,
    ) -> Self {
        Self::with_input_device(motherboard, power_supply, cpu, computer_case, video_card, None)
    }

    pub fn with_input_device(
        motherboard: &str,
        power_supply: &str,
        cpu: &str,
        computer_case: Option<&str>,
        video_card: Option<&str>,
        input_device: Option<&str>,
    ) -> Self {
        Self::with_output_device(
            motherboard,
            power_supply,
            cpu,
            computer_case,
            video_card,
            input_device,
            None,
        )
    }

    pub fn with_output_device(
        motherboard: &str,
        power_supply: &str,
        cpu: &str,
        computer_case: Option<&str>,
        video_card: Option<&str>,
        input_device: Option<&str>,
        output_device: Option<&str>,
    ) -> Self {
        TelescopingNotebook {
            motherboard: motherboard.to_string(),
            power_supply: power_supply.to_string(),
            cpu: cpu.to_string(),
            computer_case: computer_case.map(str::to_string),
            video_card: video_card.map(str::to_string),
            input_device: input_device.map(str::to_string),
            output_device: output_device.map(str::to_string),
        }
    }
}

// ============================================================================
// Anti-pattern: Default + setters
// ============================================================================

/// Readable to construct, but the value is observable half-built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JavaBeansNotebook {
    motherboard: Option<String>,
    power_supply: Option<String>,
    cpu: Option<String>,
    computer_case: Option<String>,
    video_card: Option<String>,
    input_device: Option<String>,
    output_device: Option<String>,
}

impl JavaBeansNotebook {
    pub fn set_motherboard(&mut self, motherboard: impl Into<String>) {
        self.motherboard = Some(motherboard.into());
    }

    pub fn set_power_supply(&mut self, power_supply: impl Into<String>) {
        self.power_supply = Some(power_supply.into());
    }

    pub fn set_cpu(&mut self, cpu: impl Into<String>) {
        self.cpu = Some(cpu.into());
    }

    pub fn set_computer_case(&mut self, computer_case: impl Into<String>) {
        self.computer_case = Some(computer_case.into());
    }

    pub fn set_video_card(&mut self, video_card: impl Into<String>) {
        self.video_card = Some(video_card.into());
    }

    pub fn set_input_device(&mut self, input_device: impl Into<String>) {
        self.input_device = Some(input_device.into());
    }

    pub fn set_output_device(&mut self, output_device: impl Into<String>) {
        self.output_device = Some(output_device.into());
    }

    pub fn computer_case(&self) -> Option<&str> {
        self.computer_case.as_deref()
    }

    pub fn video_card(&self) -> Option<&str> {
        self.video_card.as_deref()
    }

    pub fn input_device(&self) -> Option<&str> {
        self.input_device.as_deref()
    }

    pub fn output_device(&self) -> Option<&str> {
        self.output_device.as_deref()
    }

    /// `false` while any required part is still missing.
    pub fn is_complete(&self) -> bool {
        self.motherboard.is_some() && self.power_supply.is_some() && self.cpu.is_some()
    }
}

// ============================================================================
// Example: Consuming builder with required arguments
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Notebook {
    motherboard: String,
    power_supply: String,
    cpu: String,

    computer_case: Option<String>,
    video_card: Option<String>,
    input_device: Option<String>,
    output_device: Option<String>,
}

#[derive(Debug, Clone)]
#[must_use = "a builder does nothing until .build() is called"]
pub struct NotebookBuilder {
    motherboard: String,
    power_supply: String,
    cpu: String,

    computer_case: Option<String>,
    video_card: Option<String>,
    input_device: Option<String>,
    output_device: Option<String>,
}

impl Notebook {
    // Provide a convenient entry point to the builder.
    pub fn builder(
        motherboard: impl Into<String>,
        power_supply: impl Into<String>,
        cpu: impl Into<String>,
    ) -> NotebookBuilder {
        NotebookBuilder::new(motherboard, power_supply, cpu)
    }

    pub fn motherboard(&self) -> &str {
        &self.motherboard
    }

    pub fn power_supply(&self) -> &str {
        &self.power_supply
    }

    pub fn cpu(&self) -> &str {
        &self.cpu
    }

    pub fn computer_case(&self) -> Option<&str> {
        self.computer_case.as_deref()
    }

    pub fn video_card(&self) -> Option<&str> {
        self.video_card.as_deref()
    }

    pub fn input_device(&self) -> Option<&str> {
        self.input_device.as_deref()
    }

    pub fn output_device(&self) -> Option<&str> {
        self.output_device.as_deref()
    }
}

impl NotebookBuilder {
    // Required parts go through `new`, so a builder can never lack them.
    pub fn new(
        motherboard: impl Into<String>,
        power_supply: impl Into<String>,
        cpu: impl Into<String>,
    ) -> Self {
        NotebookBuilder {
            motherboard: motherboard.into(),
            power_supply: power_supply.into(),
            cpu: cpu.into(),
            computer_case: None,
            video_card: None,
            input_device: None,
            output_device: None,
        }
    }

    pub fn computer_case(mut self, computer_case: impl Into<String>) -> Self {
        self.computer_case = Some(computer_case.into());
        self
    }

    pub fn video_card(mut self, video_card: impl Into<String>) -> Self {
        self.video_card = Some(video_card.into());
        self
    }

    pub fn input_device(mut self, input_device: impl Into<String>) -> Self {
        self.input_device = Some(input_device.into());
        self
    }

    pub fn output_device(mut self, output_device: impl Into<String>) -> Self {
        self.output_device = Some(output_device.into());
        self
    }

    pub fn build(self) -> Notebook {
        debug!(cpu = %self.cpu, "building notebook");
        Notebook {
            motherboard: self.motherboard,
            power_supply: self.power_supply,
            cpu: self.cpu,
            computer_case: self.computer_case,
            video_card: self.video_card,
            input_device: self.input_device,
            output_device: self.output_device,
        }
    }
}

// ============================================================================
// Example: Feeding the builder from configuration
// ============================================================================

/// Notebook description as it appears in a settings file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotebookSpec {
    pub motherboard: String,
    pub power_supply: String,
    pub cpu: String,
    pub computer_case: Option<String>,
    pub video_card: Option<String>,
    pub input_device: Option<String>,
    pub output_device: Option<String>,
}

impl NotebookSpec {
    pub fn into_builder(self) -> NotebookBuilder {
        let mut builder = NotebookBuilder::new(self.motherboard, self.power_supply, self.cpu);
        if let Some(computer_case) = self.computer_case {
            builder = builder.computer_case(computer_case);
        }
        if let Some(video_card) = self.video_card {
            builder = builder.video_card(video_card);
        }
        if let Some(input_device) = self.input_device {
            builder = builder.input_device(input_device);
        }
        if let Some(output_device) = self.output_device {
            builder = builder.output_device(output_device);
        }
        builder
    }
}

pub fn run_demo(configured: Option<NotebookSpec>) {
    section("Telescoping Constructors");
    let telescoping =
        TelescopingNotebook::with_video_card("Intel", "Rosewill", "IntelCore i5", None, Some("GeForce"));
    println!("{:#?}", telescoping);
    println!("Which positional `None` was the case again?");

    section("Default + Setters");
    let mut beans = JavaBeansNotebook::default();
    beans.set_motherboard("Intel");
    println!("after one setter, complete = {}", beans.is_complete());
    beans.set_power_supply("Rosewill");
    beans.set_cpu("IntelCore i5");
    beans.set_video_card("GeForce");
    println!("after all setters, complete = {}", beans.is_complete());

    section("Consuming Builder");
    // Usage: required parts up front, optional parts chained, build() last.
    let notebook = Notebook::builder("Intel", "Rosewill", "IntelCore i5")
        .computer_case("Master Box")
        .video_card("GeForce")
        .input_device("Genius")
        .build();
    println!("{:#?}", notebook);

    if let Some(spec) = configured {
        section("Builder Fed From Settings");
        println!("{:#?}", spec.into_builder().build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_required_only() {
        let notebook = Notebook::builder("Intel", "Rosewill", "IntelCore i5").build();

        assert_eq!(notebook.motherboard(), "Intel");
        assert_eq!(notebook.power_supply(), "Rosewill");
        assert_eq!(notebook.cpu(), "IntelCore i5");
        assert_eq!(notebook.computer_case(), None);
        assert_eq!(notebook.video_card(), None);
        assert_eq!(notebook.input_device(), None);
        assert_eq!(notebook.output_device(), None);
    }

    #[test]
    fn test_builder_all_fields() {
        let notebook = NotebookBuilder::new("Intel", "Rosewill", "IntelCore i5")
            .computer_case("Master Box")
            .video_card("GeForce")
            .input_device("Genius")
            .output_device("Dell U2720Q")
            .build();

        assert_eq!(notebook.computer_case(), Some("Master Box"));
        assert_eq!(notebook.video_card(), Some("GeForce"));
        assert_eq!(notebook.input_device(), Some("Genius"));
        assert_eq!(notebook.output_device(), Some("Dell U2720Q"));
    }

    #[test]
    fn test_builder_last_setter_wins() {
        let notebook = Notebook::builder("a", "b", "c")
            .video_card("GeForce")
            .video_card("Radeon")
            .build();
        assert_eq!(notebook.video_card(), Some("Radeon"));
    }

    #[test]
    fn test_telescoping_fills_tail_with_none() {
        let notebook = TelescopingNotebook::with_case("Intel", "Rosewill", "i5", Some("Master Box"));
        assert_eq!(notebook.computer_case.as_deref(), Some("Master Box"));
        assert_eq!(notebook.video_card, None);
        assert_eq!(notebook.output_device, None);
        assert_eq!(
            TelescopingNotebook::new("Intel", "Rosewill", "i5"),
            TelescopingNotebook::with_output_device("Intel", "Rosewill", "i5", None, None, None, None)
        );
    }

    #[test]
    fn test_java_beans_inconsistent_state() {
        let mut notebook = JavaBeansNotebook::default();
        assert!(!notebook.is_complete());

        notebook.set_cpu("IntelCore i5");
        notebook.set_output_device("Dell");
        assert!(!notebook.is_complete());

        notebook.set_motherboard("Intel");
        notebook.set_power_supply("Rosewill");
        assert!(notebook.is_complete());

        notebook.set_computer_case("Master Box");
        notebook.set_video_card("GeForce");
        notebook.set_input_device("Genius");
        assert_eq!(notebook.computer_case(), Some("Master Box"));
        assert_eq!(notebook.video_card(), Some("GeForce"));
        assert_eq!(notebook.input_device(), Some("Genius"));
        assert_eq!(notebook.output_device(), Some("Dell"));
    }

    #[test]
    fn test_spec_into_builder() {
        let spec = NotebookSpec {
            motherboard: "Asus".into(),
            power_supply: "Corsair".into(),
            cpu: "Ryzen 7".into(),
            computer_case: None,
            video_card: Some("Radeon".into()),
            input_device: None,
            output_device: None,
        };

        let expected = Notebook::builder("Asus", "Corsair", "Ryzen 7").video_card("Radeon").build();
        assert_eq!(spec.into_builder().build(), expected);
    }
}
