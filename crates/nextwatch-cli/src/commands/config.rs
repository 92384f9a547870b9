use color_eyre::Result;
use serde_json::json;

use crate::commands::Workspace;
use crate::output::{Output, OutputFormat};

pub fn run_config(workspace: &Workspace, output: &Output) -> Result<()> {
    match output.format() {
        OutputFormat::Human => {
            output.println(format!(
                "Config file:   {}",
                workspace.paths.config_file().display()
            ));
            output.println(format!("Library file:  {}", workspace.library.display()));
            output.println(format!(
                "Log directory: {}",
                workspace.paths.log_dir().display()
            ));
            output.println("");
            output.println("[view]");
            output.println(format!("filter = \"{}\"", workspace.config.view.filter));
            output.println(format!("sort = \"{}\"", workspace.config.view.sort));
            output.println(format!("group = \"{}\"", workspace.config.view.group));
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            let payload = json!({
                "config_file": workspace.paths.config_file(),
                "library_file": workspace.library,
                "log_dir": workspace.paths.log_dir(),
                "view": {
                    "filter": workspace.config.view.filter,
                    "sort": workspace.config.view.sort,
                    "group": workspace.config.view.group,
                },
            });
            output.json(&payload);
        }
    }

    Ok(())
}
