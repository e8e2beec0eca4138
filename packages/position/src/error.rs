/// Validation failures raised while editing or claiming a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PositionError {
    InvalidTickRange,
    LowerTickOutsideTickSpacing,
    UpperTickOutsideTickSpacing,
    TickOutOfRange,
    WrongTickClaimedAt,
    NotEnoughPositionLiquidity,
}
