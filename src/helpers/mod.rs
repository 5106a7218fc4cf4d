pub mod float_binaryheap;
