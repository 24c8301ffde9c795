use clap::ArgMatches;

use dadda_lib::config::{Config, EmptyColumn};

pub fn config_from_args(args: &ArgMatches) -> Config {
    let mut the_config = Config::default();

    if let Ok(Some(heights)) = args.try_get_many::<usize>("dadda_heights") {
        the_config.dadda_heights = heights.copied().collect()
    };

    if let Ok(Some(policy)) = args.try_get_one::<EmptyColumn>("empty_column") {
        the_config.empty_column = *policy
    };

    the_config
}
