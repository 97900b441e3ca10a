use blockshade_common::Result;
use blockshade_config::{config_to_json, config_to_toml, BlockshadeConfig};

pub fn run(config: &BlockshadeConfig, json: bool) -> Result<String> {
    if json {
        Ok(config_to_json(config))
    } else {
        Ok(config_to_toml(config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_output_has_sections() {
        let out = run(&BlockshadeConfig::default(), false).unwrap();
        assert!(out.contains("[render]"));
        assert!(out.contains("max_instances = 4096"));
    }

    #[test]
    fn json_output_has_sections() {
        let out = run(&BlockshadeConfig::default(), true).unwrap();
        assert!(out.contains("\"sampler\""));
    }
}
