pub mod roll_2d;
