//! Tests for compass directions, mask reversal and direction sets

#[cfg(test)]
mod tests {
    use cliffpath::spatial::direction::{Direction, DirectionSet, reverse_mask};
    use cliffpath::spatial::point::CellPoint;

    // Tests bit indices follow the clockwise order starting at North
    // Verified by reordering the enum variants
    #[test]
    fn test_bit_order() {
        for (bit, direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(Direction::from_bit(bit), Some(*direction));
            assert_eq!(direction.mask(), 1 << bit);
        }
        assert_eq!(Direction::from_bit(8), None);
    }

    // Tests unit vectors with north pointing to smaller rows
    #[test]
    fn test_unit_vectors() {
        assert_eq!(Direction::North.unit_vector(), CellPoint::new(0, -1));
        assert_eq!(Direction::NorthEast.unit_vector(), CellPoint::new(1, -1));
        assert_eq!(Direction::East.unit_vector(), CellPoint::new(1, 0));
        assert_eq!(Direction::SouthEast.unit_vector(), CellPoint::new(1, 1));
        assert_eq!(Direction::South.unit_vector(), CellPoint::new(0, 1));
        assert_eq!(Direction::SouthWest.unit_vector(), CellPoint::new(-1, 1));
        assert_eq!(Direction::West.unit_vector(), CellPoint::new(-1, 0));
        assert_eq!(Direction::NorthWest.unit_vector(), CellPoint::new(-1, -1));
    }

    // Tests opposite directions cancel out and sit four bits apart
    #[test]
    fn test_opposites() {
        for direction in Direction::ALL {
            let opposite = direction.opposite();
            assert_eq!(opposite.opposite(), direction);
            assert_eq!(direction.mask().rotate_left(4), opposite.mask());
            assert_eq!(
                direction.unit_vector() + opposite.unit_vector(),
                CellPoint::new(0, 0)
            );
        }
    }

    // Tests mask reversal swaps nibbles
    // Verified by replacing the swap with a bit reversal
    #[test]
    fn test_reverse_mask_known_values() {
        assert_eq!(reverse_mask(0b0000_0001), 0b0001_0000);
        assert_eq!(reverse_mask(0b0100_0000), 0b0000_0100);
        assert_eq!(reverse_mask(0x11), 0x11);
        assert_eq!(reverse_mask(0xFF), 0xFF);
        assert_eq!(reverse_mask(0x00), 0x00);
        assert_eq!(reverse_mask(0b1000_0011), 0b0011_1000);
    }

    // Tests reversal maps every single direction to its opposite and is an involution
    #[test]
    fn test_reverse_mask_properties() {
        for direction in Direction::ALL {
            assert_eq!(reverse_mask(direction.mask()), direction.opposite().mask());
        }
        for mask in 0..=u8::MAX {
            assert_eq!(reverse_mask(reverse_mask(mask)), mask);
        }
    }

    // Tests direction sets enumerate in canonical order
    #[test]
    fn test_direction_set() {
        let set = DirectionSet::from_mask(0b0101_0001);

        assert_eq!(set.len(), 3);
        assert!(set.contains(Direction::North));
        assert!(set.contains(Direction::South));
        assert!(set.contains(Direction::West));
        assert!(!set.contains(Direction::East));
        assert_eq!(
            set.directions(),
            vec![Direction::North, Direction::South, Direction::West]
        );
        assert_eq!(set.to_string(), "[N S W]");

        assert!(DirectionSet::from_mask(0).is_empty());
        assert_eq!(DirectionSet::ALL.directions(), Direction::ALL.to_vec());
    }
}
