mod common;

mod verbose_logging;
