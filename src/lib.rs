mod command;
mod error;
mod options;

pub use command::*;
pub use error::*;
pub use options::*;


pub const USAGE: &str = "Allowed options:
  --help                  produce this help message

  -c [--config] path      path to config json file (Required)

And ONE of the following:
  -S [--single_page] path render a single page of the pdf as PNG into <path>
  -i [--info] path        write the document info as json into <path>
  -h [--human]            process everything and print to stdout, mainly for debugging
  -o [--output] path      process everything and save it as json at <path>

Page selection (not with --info):
  -s [--start] n          first page of the range to process
  -e [--end] n            last page of the range to process
  -p [--page] n           process only page <n>, not combinable with --start/--end";
