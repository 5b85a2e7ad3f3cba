//! Script class template command

use anyhow::{bail, Result};
use ecma_path::is_reserved_word;
use ecma_weld::script_template;

/// Run the template command with the given arguments
pub fn run(args: &[String]) -> Result<()> {
    print!("{}", render(args)?);
    Ok(())
}

fn render(args: &[String]) -> Result<String> {
    let [class_name, base_class] = args else {
        bail!("template requires a class name and a base class: ecma template <ClassName> <BaseClass>");
    };
    if is_reserved_word(class_name) {
        bail!("'{}' is a reserved word and cannot name a class", class_name);
    }
    Ok(script_template(class_name, base_class))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render() {
        let source = render(&args(&["Player", "Node2D"])).unwrap();
        assert!(source.starts_with("export default class Player extends godot.Node2D {"));
    }

    #[test]
    fn test_render_rejects_reserved_word() {
        let err = render(&args(&["Promise", "Node"])).unwrap_err();
        assert!(err.to_string().contains("reserved word"));
        assert!(render(&args(&["Player"])).is_err());
    }
}
