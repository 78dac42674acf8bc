//! Offline grading template check.

use anyhow::{Result, bail};
use facultyhub::facultyhub_core::Operation;
use facultyhub::modules::grading_templates::{GradingTemplateForm, WeightComponent};

pub fn check(name: &str, weights: [u32; 5]) -> Result<()> {
    let mut form = GradingTemplateForm::new();
    form.set_name(name);
    for (component, value) in WeightComponent::ALL.into_iter().zip(weights) {
        form.set_weight(component, value);
    }

    for component in WeightComponent::ALL {
        println!("  {:<12} {:>3}", component.label(), form.weight(component));
    }
    println!("  المجموع: {}", form.running_total());

    match form.validate() {
        Ok(_) => {
            println!("✅ القالب صالح للحفظ");
            Ok(())
        }
        Err(e) => bail!(e.user_message(Operation::SaveTemplate)),
    }
}
