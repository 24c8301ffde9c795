use std::path::PathBuf;

use clap::ArgMatches;

use dadda_lib::{config, encoding::equivalence::Link};

pub const LINK: Link = Link::Equal;

#[derive(Clone)]
pub struct ConfigIO {
    pub output: PathBuf,
    pub lhs: Option<u64>,
    pub rhs: Option<u64>,
    pub link: Link,
    pub show_stats: bool,
}

impl Default for ConfigIO {
    fn default() -> Self {
        ConfigIO {
            output: PathBuf::from(config::defaults::OUTPUT_PATH),
            lhs: None,
            rhs: None,
            link: LINK,
            show_stats: false,
        }
    }
}

impl ConfigIO {
    pub fn from_args(args: &ArgMatches) -> Self {
        let mut the_config = ConfigIO::default();

        if let Ok(Some(path)) = args.try_get_one::<PathBuf>("output") {
            the_config.output = path.clone()
        };

        if let Ok(Some(value)) = args.try_get_one::<u64>("lhs") {
            the_config.lhs = Some(*value)
        };

        if let Ok(Some(value)) = args.try_get_one::<u64>("rhs") {
            the_config.rhs = Some(*value)
        };

        if let Ok(Some(link)) = args.try_get_one::<Link>("link") {
            the_config.link = *link
        };

        if let Ok(Some(true)) = args.try_get_one::<bool>("stats") {
            the_config.show_stats = true
        };

        the_config
    }
}
